use lazyvec::{dot, seq, ExpressionExt, Sequence};

fn main() {
    let mut a: Sequence<i32> = seq![1, 9, -8, 5, 2, 9, 0];
    a = ((3_i32 * &a) / 2_i32).materialize();
    println!("a = {a}");

    let b: Sequence<i32> = (0..a.len() as i32).collect();
    match dot(&a, &b) {
        Ok(value) => println!("a . b = {value}"),
        Err(err) => eprintln!("{err}"),
    }

    for n in a.iter().rev() {
        print!("{n} ");
    }
    println!();
}
