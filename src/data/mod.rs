/// Data layer: number lists and how they are loaded.
///
/// Architecture:
/// ```text
///  .txt / .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → NumberList
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ NumberList │  Vec<i64>, source path
///   └────────────┘
///        │
///        ▼
///   stats / report
/// ```

pub mod loader;
pub mod model;
