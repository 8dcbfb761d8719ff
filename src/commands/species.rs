//! # species 子命令实现
//!
//! 打印各金属的模型参数。
//!
//! ## 依赖关系
//! - 使用 `models/species.rs`

use crate::error::Result;
use crate::models::{MetalSpecies, ModelParameters};
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SpeciesRow {
    #[tabled(rename = "Metal")]
    metal: String,
    #[tabled(rename = "Ed (eV)")]
    donor: String,
    #[tabled(rename = "Ep (eV)")]
    acceptor: String,
    #[tabled(rename = "V0 (eV)")]
    hopping: String,
    #[tabled(rename = "d0 (Å)")]
    bond_length: String,
}

fn row(label: &str, params: &ModelParameters) -> SpeciesRow {
    SpeciesRow {
        metal: label.to_string(),
        donor: format!("{:.2}", params.on_site_donor),
        acceptor: format!("{:.2}", params.on_site_acceptor),
        hopping: format!("{:.2}", params.reference_hopping),
        bond_length: format!("{:.2}", params.reference_bond_length),
    }
}

/// 执行 species 命令
pub fn execute() -> Result<()> {
    output::print_header("Metal Species Parameters");

    let mut rows: Vec<SpeciesRow> = MetalSpecies::known()
        .iter()
        .map(|m| row(m.symbol(), &ModelParameters::for_species(m)))
        .collect();

    let fallback = MetalSpecies::Unknown(String::new());
    rows.push(row("(other)", &ModelParameters::for_species(&fallback)));

    println!("{}", Table::new(&rows));
    output::print_info("A-site cations are recorded but do not enter the model");
    Ok(())
}
