#![cfg(test)]

mod utils;

mod transfer;
