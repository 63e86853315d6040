#![forbid(unsafe_code)]

//! Generative models, architecture families, and citation trends.

use serde::Serialize;

/// A published peptide generation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationModel {
    pub id: &'static str,
    pub name: &'static str,
    pub year: u16,
    pub architecture: &'static str,
    pub journal: &'static str,
    pub citations: u32,
    pub github: Option<&'static str>,
    pub stars: Option<u32>,
    pub features: &'static [&'static str],
    pub description: &'static str,
    pub doi: &'static str,
}

impl GenerationModel {
    /// Resolver URL for the paper.
    #[must_use]
    pub fn doi_url(&self) -> String {
        format!("https://doi.org/{}", self.doi)
    }

    /// Whether the code is public.
    #[must_use]
    pub fn is_open_source(&self) -> bool {
        self.github.is_some()
    }
}

pub const GENERATION_MODELS: &[GenerationModel] = &[
    GenerationModel {
        id: "hydramp",
        name: "HydrAMP",
        year: 2023,
        architecture: "条件变分自编码器 (cVAE)",
        journal: "Nature Communications",
        citations: 177,
        github: Some("https://github.com/szczurek-lab/hydramp"),
        stars: Some(56),
        features: &["无条件生成", "类似物生成", "AMP分类", "MIC分类"],
        description: "基于条件VAE的成熟模型，提供无约束生成和类似物生成两种模式。将序列编码到连续的低维潜在空间，再从该空间解码生成新序列。支持AMP/非AMP条件生成，内置MIC分类器和AMP分类器。",
        doi: "10.1038/s41467-023-36994-z",
    },
    GenerationModel {
        id: "diff-amp",
        name: "Diff-AMP",
        year: 2024,
        architecture: "扩散+GAN+强化学习",
        journal: "Briefings in Bioinformatics",
        citations: 80,
        github: Some("https://github.com/wrab12/diff-amp"),
        stars: Some(17),
        features: &["序列生成", "AMP识别", "多属性预测", "迭代优化"],
        description: "创新的四合一集成框架，将扩散模型和GAN结合用于生成，整合了基于预训练模型的分类器和基于CNN的属性预测器，最后通过强化学习进行优化。提供完整的生成-评估-优化闭环。",
        doi: "10.1093/bib/bbae078",
    },
    GenerationModel {
        id: "amp-designer",
        name: "AMP-Designer",
        year: 2025,
        architecture: "大型语言模型 (LLM)",
        journal: "Science Advances",
        citations: 82,
        github: None,
        stars: None,
        features: &["从头设计", "广谱抗菌", "快速验证", "多条件生成"],
        description: "基于LLM的基础模型，11天内实现18个广谱抗革兰氏阴性菌AMP的从头设计，体外验证成功率94.4%。从设计到验证仅需48天，展示了LLM在AMP设计中的巨大潜力。",
        doi: "10.1126/sciadv.ads8932",
    },
    GenerationModel {
        id: "ampgen",
        name: "AMPGen",
        year: 2025,
        architecture: "进化信息+扩散模型",
        journal: "Communications Biology",
        citations: 17,
        github: None,
        stars: None,
        features: &["靶标特异性", "进化信息保留", "从头设计"],
        description: "利用多序列比对(MSA)中的进化信息，结合条件扩散模型进行靶标特异性AMP的从头设计。创新性地将进化信息融入生成过程。",
        doi: "10.1038/s42003-025-08282-7",
    },
    GenerationModel {
        id: "broadamp-gpt",
        name: "BroadAMP-GPT",
        year: 2025,
        architecture: "GPT模型",
        journal: "Gut Microbes",
        citations: 9,
        github: None,
        stars: None,
        features: &["广谱抗菌", "多层筛选", "ESKAPE病原体"],
        description: "集成计算-实验框架，使用GPT模型生成广谱AMP，配合多层筛选策略，专门针对多重耐药ESKAPE病原体。避免了GAN训练不稳定和VAE空间分布约束问题。",
        doi: "10.1080/19490976.2025.2523811",
    },
    GenerationModel {
        id: "latent-diffusion",
        name: "潜在扩散模型",
        year: 2025,
        architecture: "VAE+潜在扩散+条件生成",
        journal: "Science Advances",
        citations: 52,
        github: None,
        stars: None,
        features: &["多样性生成", "高效设计", "分子动力学验证"],
        description: "结合VAE和潜在扩散模型进行条件生成，实现多样且高效的AMP从头设计。通过分子动力学模拟验证生成肽的结构和功能。",
        doi: "10.1126/sciadv.xxx",
    },
];

/// Qualitative profile of one architecture family, scored 0..=100.
///
/// Serialized field names match the chart series keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureProfile {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub representatives: &'static str,
    pub principle: &'static str,
    pub pros: &'static str,
    pub cons: &'static str,
    pub diversity_score: u8,
    pub quality_score: u8,
    pub speed_score: u8,
    pub stability_score: u8,
}

pub const ARCHITECTURES: &[ArchitectureProfile] = &[
    ArchitectureProfile {
        id: "vae",
        kind: "变分自编码器 (VAE)",
        representatives: "HydrAMP, PepCVAE",
        principle: "将序列编码到连续的低维潜在空间，再从该空间解码生成新序列",
        pros: "能够学习平滑的潜在空间，适合生成与已知序列相似的变体",
        cons: "生成序列的多样性可能受限",
        diversity_score: 65,
        quality_score: 75,
        speed_score: 85,
        stability_score: 90,
    },
    ArchitectureProfile {
        id: "gan",
        kind: "生成对抗网络 (GAN)",
        representatives: "AMPGAN, Diff-AMP",
        principle: "通过生成器和判别器的对抗性训练，生成高质量序列",
        pros: "能够生成高质量、高真实感的序列",
        cons: "训练过程不稳定，容易出现模式崩溃",
        diversity_score: 70,
        quality_score: 85,
        speed_score: 80,
        stability_score: 55,
    },
    ArchitectureProfile {
        id: "diffusion",
        kind: "扩散模型 (Diffusion)",
        representatives: "AMPGen, ProT-Diff",
        principle: "从随机噪声开始，通过学习到的去噪过程逐步生成结构化的序列",
        pros: "生成质量和多样性均很高",
        cons: "推理速度相对较慢，计算成本较高",
        diversity_score: 90,
        quality_score: 90,
        speed_score: 45,
        stability_score: 80,
    },
    ArchitectureProfile {
        id: "llm",
        kind: "大型语言模型 (LLM)",
        representatives: "AMP-Designer, BroadAMP-GPT",
        principle: "将肽序列视为语言，利用预训练语言模型的强大能力进行生成",
        pros: "能够利用海量预训练知识，支持复杂的条件生成",
        cons: "需要大量计算资源，对小样本任务可能过拟合",
        diversity_score: 85,
        quality_score: 88,
        speed_score: 70,
        stability_score: 75,
    },
];

/// Yearly publication counts per architecture family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CitationTrend {
    pub year: u16,
    pub vae: u32,
    pub gan: u32,
    pub diffusion: u32,
    pub llm: u32,
}

pub const CITATION_TRENDS: &[CitationTrend] = &[
    CitationTrend { year: 2020, vae: 15, gan: 25, diffusion: 2, llm: 0 },
    CitationTrend { year: 2021, vae: 28, gan: 42, diffusion: 5, llm: 3 },
    CitationTrend { year: 2022, vae: 35, gan: 48, diffusion: 18, llm: 8 },
    CitationTrend { year: 2023, vae: 52, gan: 55, diffusion: 45, llm: 22 },
    CitationTrend { year: 2024, vae: 60, gan: 58, diffusion: 78, llm: 55 },
    CitationTrend { year: 2025, vae: 65, gan: 60, diffusion: 95, llm: 88 },
];
