//! Files below `assets/`, embedded at compile time. Every file becomes a `&str`
//! constant named after the file, every directory a module.

include!(env!("ASSETS"));
