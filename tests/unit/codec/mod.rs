mod decode;
mod encode;
mod pattern;
