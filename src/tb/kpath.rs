//! # k 路径生成
//!
//! 沿简立方布里渊区高对称路径 Γ → X → M → Γ 线性插值采样。
//!
//! 每段取 i = 0..n-1，分数 f = i/n，因此最后一个点距 Γ 还差一步
//! （π/n, π/n, 0）。此采样约定与参考数据逐点对齐，不要闭合路径。
//!
//! ## 依赖关系
//! - 被 `tb/hamiltonian.rs`, `tb/simulator.rs`, `tb/sweep.rs` 使用
//! - 使用 `models/band.rs` 的 KPoint

use crate::error::{PerovskiteError, Result};
use crate::models::KPoint;

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::Arc;

/// 高对称路径的段数
pub const SEGMENTS: usize = 3;

/// 高对称点标签，按路径顺序
pub const LABELS: [&str; 4] = ["Γ", "X", "M", "Γ"];

/// 有序 k 点序列
///
/// 只能由 `generate_k_path` 构造，长度恒为 3 × 每段点数。
#[derive(Debug, Clone, PartialEq)]
pub struct KPath {
    points: Vec<KPoint>,
    points_per_segment: usize,
}

impl KPath {
    pub fn points(&self) -> &[KPoint] {
        &self.points
    }

    pub fn points_per_segment(&self) -> usize {
        self.points_per_segment
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KPoint> {
        self.points.iter()
    }

    /// 高对称点在路径中的索引；末尾的 Γ 不在采样内，记为路径长度
    pub fn label_indices(&self) -> [(usize, &'static str); 4] {
        let n = self.points_per_segment;
        [
            (0, LABELS[0]),
            (n, LABELS[1]),
            (2 * n, LABELS[2]),
            (3 * n, LABELS[3]),
        ]
    }
}

/// 生成 Γ → X → M → Γ 路径
pub fn generate_k_path(points_per_segment: usize) -> Result<KPath> {
    if points_per_segment == 0 {
        return Err(PerovskiteError::InvalidResolution(points_per_segment));
    }

    let n = points_per_segment;
    let mut points = Vec::with_capacity(SEGMENTS * n);

    // Γ (0,0,0) -> X (π,0,0)
    for i in 0..n {
        let val = PI * (i as f64 / n as f64);
        points.push(KPoint::new(val, 0.0, 0.0));
    }

    // X (π,0,0) -> M (π,π,0)
    for i in 0..n {
        let val = PI * (i as f64 / n as f64);
        points.push(KPoint::new(PI, val, 0.0));
    }

    // M (π,π,0) -> Γ (0,0,0)
    for i in 0..n {
        let val = PI * (1.0 - i as f64 / n as f64);
        points.push(KPoint::new(val, val, 0.0));
    }

    log::trace!("generated k-path: {} points per segment", n);

    Ok(KPath {
        points,
        points_per_segment: n,
    })
}

/// 按分辨率缓存的 k 路径
///
/// 纯记忆化：同一分辨率总是得到相同的路径，缓存由调用方持有。
#[derive(Debug, Default)]
pub struct KPathCache {
    paths: HashMap<usize, Arc<KPath>>,
}

impl KPathCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取出（必要时生成）指定分辨率的路径
    pub fn get(&mut self, points_per_segment: usize) -> Result<Arc<KPath>> {
        if let Some(path) = self.paths.get(&points_per_segment) {
            return Ok(Arc::clone(path));
        }

        let path = Arc::new(generate_k_path(points_per_segment)?);
        self.paths.insert(points_per_segment, Arc::clone(&path));
        log::debug!("cached k-path for resolution {}", points_per_segment);
        Ok(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
