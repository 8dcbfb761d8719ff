//! # validate / reference 子命令实现
//!
//! - `validate`: 读取参考 JSON，逐场景比较，任一失败则返回错误
//! - `reference`: 用本程序计算标准场景并写出参考 JSON
//!
//! ## 依赖关系
//! - 使用 `cli/validate.rs` 定义的参数
//! - 使用 `validation/` 进行比较与读写

use crate::cli::validate::{ReferenceArgs, ValidateArgs};
use crate::error::{PerovskiteError, Result};
use crate::models::{configure, MetalSpecies};
use crate::tb::generate_k_path;
use crate::utils::output;
use crate::validation::{self, ground_truth, harness, ValidationReport};

use tabled::{Table, Tabled};

/// 比较表行
#[derive(Tabled)]
struct CheckRow {
    #[tabled(rename = "Quantity")]
    field: String,
    #[tabled(rename = "Engine")]
    engine: String,
    #[tabled(rename = "Reference")]
    reference: String,
    #[tabled(rename = "|Error|")]
    error: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// 执行交叉验证
pub fn execute(args: ValidateArgs) -> Result<()> {
    output::print_header("Physics Engine Validation");

    if !(args.tolerance > 0.0) {
        return Err(PerovskiteError::InvalidArgument(format!(
            "tolerance must be > 0, got {}",
            args.tolerance
        )));
    }

    let truth = ground_truth::load(&args.reference)?;
    output::print_success(&format!(
        "Loaded {} scenarios from '{}'",
        truth.len(),
        args.reference.display()
    ));

    super::warn_unknown_metal(&args.metal);
    let params = configure(&args.metal);
    let k_path = generate_k_path(args.resolution as usize)?;
    let scenarios = validation::default_scenarios();

    let report = harness::validate(&truth, &scenarios, &k_path, &params, args.tolerance)?;
    print_report(&report);

    for label in &report.unchecked {
        output::print_warning(&format!(
            "Reference scenario '{}' has no matching engine scenario and was not checked",
            label
        ));
    }

    output::print_separator();
    if report.passed() {
        output::print_done(&format!(
            "All {} scenarios passed (tolerance < {:e})",
            report.scenarios.len(),
            report.tolerance
        ));
        Ok(())
    } else {
        Err(PerovskiteError::Other(format!(
            "{} of {} scenarios failed validation",
            report.failed_count(),
            report.scenarios.len()
        )))
    }
}

/// 生成参考数据
pub fn execute_reference(args: ReferenceArgs) -> Result<()> {
    output::print_header("Reference Data Generation");

    if args.output.exists() && !args.overwrite {
        output::print_warning(&format!(
            "'{}' exists, use --overwrite to replace it",
            args.output.display()
        ));
        return Ok(());
    }

    super::warn_unknown_metal(&args.metal);
    let metal = MetalSpecies::from_symbol(&args.metal);
    let scenarios = validation::default_scenarios();
    let truth = harness::generate_reference(&scenarios, &metal, args.resolution as usize)?;

    ground_truth::save(&truth, &args.output)?;
    output::print_success(&format!(
        "{} scenarios written to '{}'",
        truth.len(),
        args.output.display()
    ));
    Ok(())
}

/// 打印每个场景的比较表
fn print_report(report: &ValidationReport) {
    for scenario in &report.scenarios {
        output::print_info(&format!(
            "{}: angle {:.1}°, bond {:.2} Å",
            scenario.scenario.label, scenario.scenario.angle_deg, scenario.scenario.bond_length
        ));

        let rows: Vec<CheckRow> = scenario
            .checks
            .iter()
            .map(|c| CheckRow {
                field: c.field.clone(),
                engine: format!("{:.6}", c.engine),
                reference: format!("{:.6}", c.reference),
                error: format!("{:.2e}", c.error),
                status: output::pass_mark(c.passed),
            })
            .collect();

        println!("{}", Table::new(&rows));

        for failure in scenario.failures() {
            output::print_warning(&format!(
                "{}: {} mismatch (error {:.2e} >= {:e})",
                scenario.scenario.label, failure.field, failure.error, report.tolerance
            ));
        }
        println!("  Status: {}\n", output::pass_mark(scenario.passed()));
    }
}
