mod jsonl;

pub use jsonl::{BUSINESSES_FILE, flush_to_jsonl, read_businesses};
