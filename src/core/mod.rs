// Copyright @yucwang 2021

pub mod histogram;
pub mod lfsr;
pub mod word;
