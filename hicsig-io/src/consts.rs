pub const CHR1_COLUMN: &str = "chr1";
pub const MID1_COLUMN: &str = "fragmentMid1";
pub const CHR2_COLUMN: &str = "chr2";
pub const MID2_COLUMN: &str = "fragmentMid2";
pub const P_VALUE_COLUMN: &str = "p-value";
pub const Q_VALUE_COLUMN: &str = "q-value";
pub const MISSING_VALUE: &str = "NA";
