// Output formatting: terminal display of frequency and similarity reports.

pub mod terminal;
