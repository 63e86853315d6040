#![forbid(unsafe_code)]

//! Reusable open-source repositories.

use serde::Serialize;

/// A GitHub repository listed in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubRepo {
    pub name: &'static str,
    pub full_name: &'static str,
    pub url: &'static str,
    pub stars: u32,
    pub description: &'static str,
    pub language: &'static str,
    pub features: &'static [&'static str],
}

impl GithubRepo {
    /// Stable id; repositories are keyed by `owner/name`.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.full_name
    }
}

pub const GITHUB_REPOS: &[GithubRepo] = &[
    GithubRepo {
        name: "hydramp",
        full_name: "szczurek-lab/hydramp",
        url: "https://github.com/szczurek-lab/hydramp",
        stars: 56,
        description: "HydrAMP: 基于条件VAE的抗菌肽生成与评估模型",
        language: "Python (TensorFlow)",
        features: &["无条件生成", "类似物生成", "AMP分类", "MIC分类"],
    },
    GithubRepo {
        name: "diff-amp",
        full_name: "wrab12/diff-amp",
        url: "https://github.com/wrab12/diff-amp",
        stars: 17,
        description: "Diff-AMP: 四合一AMP框架（生成+识别+预测+优化）",
        language: "Python (PyTorch)",
        features: &["扩散生成", "AMP识别", "多属性预测", "强化学习优化"],
    },
    GithubRepo {
        name: "LLAMP",
        full_name: "GIST-CSBL/LLAMP",
        url: "https://github.com/GIST-CSBL/LLAMP",
        stars: 1,
        description: "LLAMP: 基于ESM-2的物种感知MIC预测模型",
        language: "Python (PyTorch)",
        features: &["MIC预测", "ESM-2微调", "物种感知"],
    },
    GithubRepo {
        name: "Antimicrobial-peptide-generation",
        full_name: "gc-js/Antimicrobial-peptide-generation",
        url: "https://github.com/gc-js/Antimicrobial-peptide-generation",
        stars: 18,
        description: "AMP生成、分类和回归的完整工具集",
        language: "Python",
        features: &["GAN生成", "分类", "回归预测", "HuggingFace部署"],
    },
    GithubRepo {
        name: "modlAMP",
        full_name: "alexarnimueller/modlAMP",
        url: "https://github.com/alexarnimueller/modlAMP",
        stars: 60,
        description: "肽序列生成、描述符计算和序列分析的Python包",
        language: "Python",
        features: &["描述符计算", "序列生成", "数据库查询", "可视化"],
    },
    GithubRepo {
        name: "CalcAMP",
        full_name: "CDDLeiden/CalcAMP",
        url: "https://github.com/CDDLeiden/CalcAMP",
        stars: 5,
        description: "机器学习预测AMP对革兰氏阳性和阴性菌的活性",
        language: "Python",
        features: &["活性预测", "革兰氏分类", "机器学习"],
    },
    GithubRepo {
        name: "Awesome-AMP-Design",
        full_name: "ruihan-dong/Awesome-AMP-Design",
        url: "https://github.com/ruihan-dong/Awesome-AMP-Design",
        stars: 26,
        description: "AI驱动的抗菌肽设计论文精选列表",
        language: "Markdown",
        features: &["论文列表", "分类整理", "持续更新"],
    },
];
