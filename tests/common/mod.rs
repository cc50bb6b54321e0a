#![allow(dead_code)]

/// Transcript laid out with the label block before the card number.
pub const LABEL_BLOCK_TRANSCRIPT: &str = "\
WEST AFRICAN EXAMINATIONS COUNCIL
Candidate Name
Type of Examination
Examination Centre
Card Details
1234567890
KWAME MENSAH
WASSCE FOR SCHOOL CANDIDATES 2023
Results
ENGLISH LANG
C4
CREDIT
MATHEMATICS(CORE)
B3
GOOD
INTEGRATED SCIENCE
B2
VERY GOOD
SOCIAL STUDIES
A1
EXCELLENT
PHYSICS
B3
GOOD
CHEMISTRY
C5
CREDIT
MATHEMATICS(ELECT)
A1
EXCELLENT
BIOLOGY
C6
CREDIT
";

/// Transcript with an inline "Candidate Name: ..." label.
pub const INLINE_TRANSCRIPT: &str = "\
Candidate Name: Ama Owusu
Results
ENGLISH LANG
A1
MATHEMATICS (CORE)
A1
INTEGRATED SCIENCE
A1
";
