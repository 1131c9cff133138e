//! GeneAlign banded vs unrestricted demo
//!
//! Aligns a few sequence pairs with both strategies and prints the reports.

use genealign_core::{AlignMode, SequenceAligner};

fn main() {
    println!("GeneAlign Strategy Demo");
    println!("=======================\n");

    let pairs: [(&str, &str); 3] = [
        ("AATT", "AGTT"),
        ("GATTACAGATTACA", "GATCACAGTTACAA"),
        ("ACGTACGTACGT", "ACGT"),
    ];

    let aligner = SequenceAligner::default();

    for (seq1, seq2) in pairs {
        println!("{} vs {}", seq1, seq2);
        for mode in [AlignMode::Unrestricted, AlignMode::Banded] {
            let report = aligner.align_report(seq1.as_bytes(), seq2.as_bytes(), mode, 1000);
            println!("  {:<13} cost {:>4}", mode.to_string(), report.align_cost.to_string());
            if report.is_aligned() {
                println!("    {}", report.seqi_first100);
                println!("    {}", report.seqj_first100);
            } else {
                println!("    (lengths differ by more than the band allows)");
            }
        }
        println!();
    }
}
