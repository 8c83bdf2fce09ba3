pub mod check;
pub mod checkchar;
pub mod decode;
pub mod encode;
pub mod generate;
pub mod normalize;
