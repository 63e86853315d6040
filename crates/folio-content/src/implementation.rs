#![forbid(unsafe_code)]

//! The six-step build guide shown in the implementation wizard.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImplementationStep {
    /// 1-based step number as printed.
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub tools: &'static [&'static str],
    pub details: &'static str,
}

pub const IMPLEMENTATION_STEPS: &[ImplementationStep] = &[
    ImplementationStep {
        step: 1,
        title: "环境搭建与数据准备",
        description: "搭建Python开发环境，安装核心依赖库，从DBAASP和APD数据库下载AMP序列及活性数据，构建训练集和测试集。",
        tools: &["Python 3.8+", "PyTorch / TensorFlow", "Biopython", "modlAMP", "pandas"],
        details: "建议使用conda创建独立环境。从DBAASP下载包含序列、MIC值、靶标信息的完整数据集。数据清洗包括去除冗余序列、统一序列长度范围（通常10-50个氨基酸）、标注分类标签。",
    },
    ImplementationStep {
        step: 2,
        title: "无条件序列生成",
        description: "参考HydrAMP的无条件生成模式，训练一个VAE模型，从潜在空间随机采样并解码生成全新的肽序列。",
        tools: &["HydrAMP代码库", "TensorFlow/Keras", "条件VAE架构"],
        details: "核心思路：在大量肽序列上训练VAE，学习序列的潜在表示。生成时从标准正态分布中采样潜在向量，通过解码器生成新序列。可以加入AMP条件标签，使生成偏向AMP序列。",
    },
    ImplementationStep {
        step: 3,
        title: "条件变体序列生成",
        description: "参考HydrAMP的类似物生成模式，将给定种子序列编码到潜在空间，对潜在向量进行微小扰动后解码，生成变体序列。",
        tools: &["HydrAMP代码库", "潜在空间操作", "高斯噪声扰动"],
        details: "将输入序列通过编码器映射到潜在空间，对潜在向量添加可控的高斯噪声（噪声幅度控制变异程度），然后通过解码器生成新序列。还可以在潜在空间中进行插值，生成两个序列之间的过渡变体。",
    },
    ImplementationStep {
        step: 4,
        title: "基本性质评估模块",
        description: "使用modlAMP和Biopython库，构建物理化学性质计算模块，输出分子量、长度、电荷、疏水性、等电点等指标。",
        tools: &["modlAMP", "Biopython", "NumPy"],
        details: "关键性质包括：分子量、序列长度、净电荷（pH 7.0）、疏水性（Eisenberg量表）、疏水矩、等电点、氨基酸组成比例。这些性质与AMP的活性和稳定性密切相关。",
    },
    ImplementationStep {
        step: 5,
        title: "MIC值预测模型",
        description: "参考LLAMP的思路，使用ESM-2预训练模型提取序列特征，训练回归模型预测MIC值。",
        tools: &["ESM-2", "PyTorch", "scikit-learn", "DBAASP数据"],
        details: "使用ESM-2提取序列的高维特征表示，然后训练梯度提升树或简单神经网络进行MIC值回归预测。需要DBAASP中包含MIC值的训练数据。可以针对不同菌种分别训练模型。",
    },
    ImplementationStep {
        step: 6,
        title: "抗菌谱与安全性评估",
        description: "构建多标签分类模型，预测抗革兰氏阳性/阴性菌、抗真菌、溶血性等多种属性。",
        tools: &["Diff-AMP预测模块", "CNN/Transformer", "多标签分类"],
        details: "参考Diff-AMP的多属性预测模块设计。输入为肽序列特征，输出为多个二分类概率。可以预测的属性包括：抗革兰氏阳性菌、抗革兰氏阴性菌、抗真菌、抗病毒、溶血性、细胞毒性等。",
    },
];
