#![forbid(unsafe_code)]

//! Milestones of computational peptide design, oldest first.

use folio_core::category::{CategorySet, Categorized};
use serde::Serialize;

/// Kind of milestone; drives the badge on each timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineKind {
    Model,
    Tool,
    Database,
}

impl CategorySet for TimelineKind {
    const ALL: &'static [Self] = &[Self::Model, Self::Tool, Self::Database];

    fn key(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Tool => "tool",
            Self::Database => "database",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Model => "模型",
            Self::Tool => "工具",
            Self::Database => "数据库",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    pub id: &'static str,
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: TimelineKind,
}

impl Categorized<TimelineKind> for TimelineEvent {
    fn category(&self) -> TimelineKind {
        self.kind
    }
}

const fn event(
    id: &'static str,
    year: u16,
    title: &'static str,
    description: &'static str,
    kind: TimelineKind,
) -> TimelineEvent {
    TimelineEvent {
        id,
        year,
        title,
        description,
        kind,
    }
}

pub const TIMELINE: &[TimelineEvent] = &[
    event("2017-modlamp", 2017, "modlAMP发布", "首个专门用于AMP描述符计算和分析的Python包", TimelineKind::Tool),
    event("2020-happenn", 2020, "HAPPENN发布", "基于神经网络的溶血活性预测工具，成为该领域标杆", TimelineKind::Tool),
    event("2021-ampgan-v2", 2021, "AMPGAN v2", "GAN方法在AMP生成中的重要应用，引入条件生成", TimelineKind::Model),
    event("2021-dbaasp-v3", 2021, "DBAASP v3", "AMP数据库重大更新，新增预测工具和API", TimelineKind::Database),
    event("2023-hydramp", 2023, "HydrAMP发表", "Nature Communications发表，cVAE方法的里程碑，开源代码", TimelineKind::Model),
    event("2023-mbc-attention", 2023, "MBC-Attention", "注意力机制首次用于AMP的MIC值回归预测", TimelineKind::Tool),
    event("2024-diff-amp", 2024, "Diff-AMP发表", "首个四合一集成框架，整合生成、识别、预测和优化", TimelineKind::Model),
    event("2024-pyampa", 2024, "PyAMPA发布", "高通量AMP预测和优化平台，涵盖多维度评估", TimelineKind::Tool),
    event("2025-amp-designer", 2025, "AMP-Designer", "Science Advances发表，LLM方法实现94.4%验证成功率", TimelineKind::Model),
    event("2025-ampgen", 2025, "AMPGen", "进化信息+扩散模型实现靶标特异性AMP设计", TimelineKind::Model),
    event("2025-broadamp-gpt", 2025, "BroadAMP-GPT", "GPT模型针对ESKAPE病原体生成广谱AMP", TimelineKind::Model),
    event("2025-llamp", 2025, "LLAMP", "基于ESM-2的物种感知MIC预测模型", TimelineKind::Tool),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chronological() {
        assert!(TIMELINE.windows(2).all(|w| w[0].year <= w[1].year));
    }

    #[test]
    fn ids_are_unique() {
        for (i, e) in TIMELINE.iter().enumerate() {
            assert!(TIMELINE[..i].iter().all(|p| p.id != e.id), "{}", e.id);
        }
    }

    #[test]
    fn kind_counts() {
        let count = |k: TimelineKind| TIMELINE.iter().filter(|e| e.category() == k).count();
        assert_eq!(count(TimelineKind::Model), 6);
        assert_eq!(count(TimelineKind::Tool), 5);
        assert_eq!(count(TimelineKind::Database), 1);
    }
}
