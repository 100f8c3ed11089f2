pub mod limit;

#[cfg(test)]
pub mod test_support;
