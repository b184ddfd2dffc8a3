pub mod config;
pub mod output;
pub mod roman_numeral;
pub mod scanner;
pub mod utility;
