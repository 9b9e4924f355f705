/// Image sources for blockmosaic.

pub mod image;
