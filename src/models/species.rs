//! # 元素种类与模型参数
//!
//! B 位金属决定 d 轨道在位能，其余参数（O 2p 在位能、参考跃迁积分、
//! 参考键长）对所有金属共享。参数取自 Harrison 固体表。
//!
//! ## 依赖关系
//! - 被 `tb/hopping.rs`, `tb/hamiltonian.rs`, `tb/simulator.rs` 使用
//! - 被 `commands/species.rs` 用于打印参数表

use serde::{Deserialize, Serialize};

/// O 2p 轨道在位能 (eV)
pub const ACCEPTOR_ON_SITE_EV: f64 = -6.0;

/// 参考键长下的 pdσ 跃迁积分 (eV)
pub const REFERENCE_HOPPING_EV: f64 = 2.2;

/// 参考 Ti-O 键长 (Å)
pub const REFERENCE_BOND_LENGTH: f64 = 1.96;

/// 未识别金属使用的 d 轨道在位能 (eV)，与 Ti 相同
pub const DEFAULT_DONOR_ON_SITE_EV: f64 = -2.0;

/// B 位金属种类
///
/// 未识别的元素符号不会报错，而是落入 `Unknown` 并使用默认参数。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetalSpecies {
    /// 钛 (Ti 3d)
    Ti,
    /// 锰 (Mn 3d)，d 能级更低
    Mn,
    /// 未识别的元素符号
    Unknown(String),
}

impl MetalSpecies {
    /// 从元素符号解析（区分大小写）
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "Ti" => MetalSpecies::Ti,
            "Mn" => MetalSpecies::Mn,
            other => MetalSpecies::Unknown(other.to_string()),
        }
    }

    /// 元素符号
    pub fn symbol(&self) -> &str {
        match self {
            MetalSpecies::Ti => "Ti",
            MetalSpecies::Mn => "Mn",
            MetalSpecies::Unknown(s) => s,
        }
    }

    /// d 轨道在位能 (eV)
    pub fn donor_on_site(&self) -> f64 {
        match self {
            MetalSpecies::Ti => -2.0,
            MetalSpecies::Mn => -4.0,
            MetalSpecies::Unknown(_) => DEFAULT_DONOR_ON_SITE_EV,
        }
    }

    /// 是否为有专门参数的金属
    pub fn is_known(&self) -> bool {
        !matches!(self, MetalSpecies::Unknown(_))
    }

    /// 所有有专门参数的金属
    pub fn known() -> [MetalSpecies; 2] {
        [MetalSpecies::Ti, MetalSpecies::Mn]
    }
}

impl Default for MetalSpecies {
    fn default() -> Self {
        MetalSpecies::Ti
    }
}

impl std::fmt::Display for MetalSpecies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetalSpecies::Unknown(s) => write!(f, "{} (default parameters)", s),
            known => write!(f, "{}", known.symbol()),
        }
    }
}

/// A 位阳离子种类
///
/// 只被记录和回显，不进入任何物理计算。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ASiteSpecies(pub String);

impl ASiteSpecies {
    pub fn new(symbol: impl Into<String>) -> Self {
        ASiteSpecies(symbol.into())
    }

    pub fn symbol(&self) -> &str {
        &self.0
    }
}

impl Default for ASiteSpecies {
    fn default() -> Self {
        ASiteSpecies("Ca".to_string())
    }
}

impl std::fmt::Display for ASiteSpecies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 两带紧束缚模型参数
///
/// 创建后不可变；切换金属时构造新的参数值。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// 金属 d 轨道在位能 (eV)
    pub on_site_donor: f64,
    /// O 2p 轨道在位能 (eV)
    pub on_site_acceptor: f64,
    /// 参考键长下的跃迁积分 (eV)
    pub reference_hopping: f64,
    /// 参考键长 (Å)
    pub reference_bond_length: f64,
}

impl ModelParameters {
    /// 指定金属的参数集
    pub fn for_species(metal: &MetalSpecies) -> Self {
        ModelParameters {
            on_site_donor: metal.donor_on_site(),
            on_site_acceptor: ACCEPTOR_ON_SITE_EV,
            reference_hopping: REFERENCE_HOPPING_EV,
            reference_bond_length: REFERENCE_BOND_LENGTH,
        }
    }
}

impl Default for ModelParameters {
    fn default() -> Self {
        ModelParameters::for_species(&MetalSpecies::Ti)
    }
}

/// 按元素符号选择模型参数
pub fn configure(symbol: &str) -> ModelParameters {
    ModelParameters::for_species(&MetalSpecies::from_symbol(symbol))
}
