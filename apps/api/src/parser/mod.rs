// Resume parsing: regex field extraction plus confidence scoring.
// The pipeline is a pure function of the document text; the only I/O in
// this module is the multipart/PDF handling in `handlers`.

pub mod confidence;
pub mod fields;
pub mod handlers;
pub mod pipeline;
