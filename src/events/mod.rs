pub mod motion;
pub mod pointer;
