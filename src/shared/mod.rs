pub mod constants;
pub mod routing;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
pub mod validation;
