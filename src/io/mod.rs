//! Reading and writing results databases

mod calculix;
mod json;

pub use calculix::{read_calculix_dat, read_calculix_dat_file, ShearConvention};
