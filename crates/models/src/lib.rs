pub mod errors;
pub mod db;
pub mod report;

#[cfg(test)]
mod tests;
