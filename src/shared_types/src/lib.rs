//! Generated foreign types live in `generated/`, produced by the build script.
