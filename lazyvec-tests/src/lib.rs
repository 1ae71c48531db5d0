pub mod expr;

#[cfg(test)]
mod properties;
