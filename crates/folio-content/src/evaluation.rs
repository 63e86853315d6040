#![forbid(unsafe_code)]

//! Evaluation tools, their tab grouping, and the evaluation dimensions.
//!
//! Each tool has a fine-grained [`ToolKind`]. The evaluation section shows
//! the tools under four tabs, and several kinds share a tab, so the tab
//! filter works on [`EvalTab`] and a tool's category is the tab its kind
//! belongs to.

use folio_core::category::{CategorySet, Categorized};
use serde::Serialize;

/// What a tool predicts or provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    MicPrediction,
    Hemolysis,
    MultiProperty,
    Comprehensive,
    Activity,
    Physicochemical,
    DatabasePrediction,
}

impl ToolKind {
    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MicPrediction => "MIC预测",
            Self::Hemolysis => "溶血性预测",
            Self::MultiProperty => "多属性预测",
            Self::Comprehensive => "综合评估",
            Self::Activity => "活性预测",
            Self::Physicochemical => "物理化学性质",
            Self::DatabasePrediction => "数据库+预测",
        }
    }

    /// Tab this kind is listed under.
    #[must_use]
    pub fn tab(self) -> EvalTab {
        match self {
            Self::MicPrediction => EvalTab::Mic,
            Self::Hemolysis => EvalTab::Safety,
            Self::MultiProperty | Self::Comprehensive | Self::Activity => EvalTab::Spectrum,
            Self::Physicochemical | Self::DatabasePrediction => EvalTab::Properties,
        }
    }
}

/// Tabs of the evaluation-tool browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalTab {
    Mic,
    Safety,
    Spectrum,
    Properties,
}

impl CategorySet for EvalTab {
    const ALL: &'static [Self] = &[Self::Mic, Self::Safety, Self::Spectrum, Self::Properties];

    fn key(self) -> &'static str {
        match self {
            Self::Mic => "mic",
            Self::Safety => "safety",
            Self::Spectrum => "spectrum",
            Self::Properties => "properties",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Mic => "MIC预测",
            Self::Safety => "安全性评估",
            Self::Spectrum => "抗菌谱预测",
            Self::Properties => "物化性质",
        }
    }
}

/// A predictor, calculator, or database used to score generated peptides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvaluationTool {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ToolKind,
    pub year: u16,
    pub description: &'static str,
    pub github: Option<&'static str>,
    pub features: &'static [&'static str],
}

impl Categorized<EvalTab> for EvaluationTool {
    fn category(&self) -> EvalTab {
        self.kind.tab()
    }
}

pub const EVALUATION_TOOLS: &[EvaluationTool] = &[
    EvaluationTool {
        id: "llamp",
        name: "LLAMP",
        kind: ToolKind::MicPrediction,
        year: 2025,
        description: "基于ESM-2语言模型微调，可预测针对特定菌种的最小抑菌浓度(MIC)值",
        github: Some("https://github.com/GIST-CSBL/LLAMP"),
        features: &["物种感知", "ESM-2微调", "回归预测"],
    },
    EvaluationTool {
        id: "ania",
        name: "ANIA",
        kind: ToolKind::MicPrediction,
        year: 2026,
        description: "基于Inception-Attention网络的MIC预测模型，性能优越",
        github: None,
        features: &["Inception架构", "注意力机制", "高精度"],
    },
    EvaluationTool {
        id: "mbc-attention",
        name: "MBC-Attention",
        kind: ToolKind::MicPrediction,
        year: 2023,
        description: "深度学习回归模型，利用注意力机制预测抗菌肽的MIC值",
        github: None,
        features: &["注意力机制", "回归模型", "多菌种"],
    },
    EvaluationTool {
        id: "happenn",
        name: "HAPPENN",
        kind: ToolKind::Hemolysis,
        year: 2020,
        description: "经典的基于神经网络的溶血活性分类器，被广泛引用",
        github: None,
        features: &["神经网络", "二分类", "高引用"],
    },
    EvaluationTool {
        id: "amplyze",
        name: "AmpLyze",
        kind: ToolKind::Hemolysis,
        year: 2025,
        description: "能够直接预测溶血性指标HC50的具体数值，而非仅分类",
        github: None,
        features: &["HC50预测", "回归模型", "定量评估"],
    },
    EvaluationTool {
        id: "diff-amp-predictor",
        name: "Diff-AMP (预测模块)",
        kind: ToolKind::MultiProperty,
        year: 2024,
        description: "基于CNN的多属性预测模块，可同时预测抗革兰氏阳性/阴性菌、抗真菌等20种活性",
        github: Some("https://github.com/wrab12/diff-amp"),
        features: &["多标签分类", "CNN架构", "20种属性"],
    },
    EvaluationTool {
        id: "pyampa",
        name: "PyAMPA / AMPSolve",
        kind: ToolKind::Comprehensive,
        year: 2024,
        description: "高通量预测和优化平台，涵盖溶血性、毒性、半衰期和抗菌谱等多维度评估",
        github: None,
        features: &["高通量", "多维评估", "优化建议"],
    },
    EvaluationTool {
        id: "modlamp",
        name: "modlAMP",
        kind: ToolKind::Physicochemical,
        year: 2017,
        description: "功能强大的Python包，支持计算疏水性、疏水矩、净电荷、等电点等多种关键物理化学性质",
        github: Some("https://github.com/alexarnimueller/modlAMP"),
        features: &["描述符计算", "序列分析", "可视化"],
    },
    EvaluationTool {
        id: "dbaasp",
        name: "DBAASP",
        kind: ToolKind::DatabasePrediction,
        year: 2021,
        description: "最全面的AMP数据库之一，提供在线预测工具和API，手动整理了大量肽的序列、结构和活性数据",
        github: None,
        features: &["手动策划", "API接口", "在线预测"],
    },
    EvaluationTool {
        id: "calcamp",
        name: "CalcAMP",
        kind: ToolKind::Activity,
        year: 2023,
        description: "机器学习模型，可预测AMP对革兰氏阳性和阴性菌的活性",
        github: Some("https://github.com/CDDLeiden/CalcAMP"),
        features: &["革兰氏阳性", "革兰氏阴性", "机器学习"],
    },
];

/// One axis of the evaluation radar, weighted 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvaluationDimension {
    pub id: &'static str,
    pub dimension: &'static str,
    pub description: &'static str,
    pub importance: u8,
}

/// A radar chart row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarPoint {
    pub subject: &'static str,
    pub value: u8,
    pub full_mark: u8,
}

impl EvaluationDimension {
    /// Project onto a radar row with a full mark of 100.
    #[must_use]
    pub fn radar_point(&self) -> RadarPoint {
        RadarPoint {
            subject: self.dimension,
            value: self.importance,
            full_mark: 100,
        }
    }
}

pub const EVALUATION_DIMENSIONS: &[EvaluationDimension] = &[
    EvaluationDimension {
        id: "activity",
        dimension: "抗菌活性",
        description: "MIC值预测",
        importance: 95,
    },
    EvaluationDimension {
        id: "hemolysis",
        dimension: "溶血性",
        description: "HC50预测",
        importance: 90,
    },
    EvaluationDimension {
        id: "cytotoxicity",
        dimension: "细胞毒性",
        description: "细胞毒性评估",
        importance: 85,
    },
    EvaluationDimension {
        id: "spectrum",
        dimension: "抗菌谱",
        description: "革兰氏阳性/阴性/真菌",
        importance: 80,
    },
    EvaluationDimension {
        id: "stability",
        dimension: "稳定性",
        description: "血清半衰期",
        importance: 75,
    },
    EvaluationDimension {
        id: "physicochemical",
        dimension: "物化性质",
        description: "电荷/疏水性/等电点",
        importance: 70,
    },
];
