pub mod keyword_tally;
