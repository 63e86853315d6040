#![forbid(unsafe_code)]

//! Bibliography.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reference {
    /// Citation number as printed, `[n]`.
    pub id: u8,
    pub text: &'static str,
    pub journal: &'static str,
    pub doi: Option<&'static str>,
}

impl Reference {
    /// Resolver URL, when the entry has a DOI.
    #[must_use]
    pub fn doi_url(&self) -> Option<String> {
        self.doi.map(|doi| format!("https://doi.org/{doi}"))
    }
}

pub const REFERENCES: &[Reference] = &[
    Reference {
        id: 1,
        text: "Wang, J., et al. (2025). Discovery of antimicrobial peptides with notable antibacterial potency by an LLM-based foundation model.",
        journal: "Science Advances, 11(10)",
        doi: Some("10.1126/sciadv.ads8932"),
    },
    Reference {
        id: 2,
        text: "Szymczak, P., et al. (2023). Discovering highly potent antimicrobial peptides with deep generative model HydrAMP.",
        journal: "Nature Communications, 14(1), 1394",
        doi: Some("10.1038/s41467-023-36994-z"),
    },
    Reference {
        id: 3,
        text: "Wang, R., et al. (2024). Diff-AMP: tailored designed antimicrobial peptide framework with all-in-one generation, identification, prediction and optimization.",
        journal: "Briefings in Bioinformatics, 25(2)",
        doi: Some("10.1093/bib/bbae078"),
    },
    Reference {
        id: 4,
        text: "Jin, S., et al. (2025). AMPGen: an evolutionary information-reserved and diffusion-driven generative model for de novo design of antimicrobial peptides.",
        journal: "Communications Biology, 8(1), 582",
        doi: Some("10.1038/s42003-025-08282-7"),
    },
    Reference {
        id: 5,
        text: "Li, Y., et al. (2025). BroadAMP-GPT: AI-Driven generation of broad-spectrum antimicrobial peptides for combating multidrug-resistant ESKAPE pathogens.",
        journal: "Gut Microbes, 17(1)",
        doi: Some("10.1080/19490976.2025.2523811"),
    },
    Reference {
        id: 6,
        text: "Bae, D., et al. (2025). LLAMP: AI-Guided Discovery and Optimization of Antimicrobial Peptides Through Species-Aware Language Model.",
        journal: "bioRxiv",
        doi: None,
    },
    Reference {
        id: 7,
        text: "Timmons, P. B., & Hewage, C. M. (2020). HAPPENN is a novel tool for hemolytic activity prediction for therapeutic peptides.",
        journal: "Scientific Reports, 10(1), 10869",
        doi: Some("10.1038/s41598-020-67701-3"),
    },
    Reference {
        id: 8,
        text: "Ramos-Llorens, M., et al. (2024). PyAMPA: a high-throughput prediction and optimization tool for antimicrobial peptides.",
        journal: "mSystems, 9(4)",
        doi: Some("10.1128/msystems.01358-23"),
    },
    Reference {
        id: 9,
        text: "Mueller, A., et al. (2017). modlAMP: Python for antimicrobial peptides.",
        journal: "Bioinformatics, 33(17), 2753-2755",
        doi: None,
    },
    Reference {
        id: 10,
        text: "Pirtskhalava, M., et al. (2021). DBAASP v3: database of antimicrobial/cytotoxic activity and structure of peptides.",
        journal: "Nucleic Acids Research, 49(D1), D288-D297",
        doi: None,
    },
];
