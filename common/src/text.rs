mod reverse;


pub use reverse::reverse;
