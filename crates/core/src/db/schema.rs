pub const SCHEMA: &str = "
-- Key-value table backing the prompt library
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,         -- 'prompts' or 'categories'
    value TEXT NOT NULL,          -- JSON document for the whole collection
    updated_at INTEGER NOT NULL   -- Unix timestamp (milliseconds)
);
";
