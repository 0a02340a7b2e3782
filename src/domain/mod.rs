// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that define the core
// concepts of the ingestion job.
//
// Rules for this layer:
//   - NO file I/O or network calls
//   - NO CSV or YAML parsing
//   - Only plain Rust structs, enums, and traits
//
// The only external types that appear here are the causes wrapped
// by IngestError (io, csv and YAML errors).
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Error taxonomy shared by every stage
pub mod error;

// Binary sentiment label and the label-set configuration
pub mod label;

// Raw and preprocessed tables
pub mod table;

// Core abstractions (traits) that other layers implement
pub mod traits;
