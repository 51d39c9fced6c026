//! CPU implementations of the operation traits

mod binary;
mod compare;
mod fft;
mod indexing;
mod linalg;
mod logical;
mod reduce;
mod shape;
mod unary;
mod utility;
