pub const INTERVAL_HELP: &str = "Interval of interest";
pub const INTERVAL_HELP_LONG: &str = "Interval of interest

Must be in the format 'A:B'. Each of 'A' or 'B' is a date written as yyyy, yyyy-mm or yyyy-mm-dd. 'A' stands for the first day and 'B' for the last day of the period it names. Both are optional, leaving the interval unbounded on that side.

A single date without ':' stands for the whole period it names, e.g. '2024-06' = '2024-06-01:2024-06-30'.";
