#[macro_use]
mod util;

mod family;
