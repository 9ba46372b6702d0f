use crate::error::ExportError;
use crate::model::CalculationResult;
use std::fs::File;
use std::path::Path;

const HEADER: [&str; 7] = [
    "Section",
    "Item",
    "Description",
    "Input Area",
    "Coefficient",
    "Converted Area",
    "Cost",
];

/// Writes line items, then the cost structure, then material quantities.
///
/// Core items are costed at the rounded unit price for display; the engine's
/// core total uses the unrounded price.
pub fn export_csv<P: AsRef<Path>>(result: &CalculationResult, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(HEADER)?;

    for item in &result.items {
        let (section, cost) = if item.is_extra {
            ("Extra", item.cost.unwrap_or(0.0))
        } else {
            ("Core", (item.converted_area * result.unit_price).round())
        };
        writer.write_record([
            section,
            item.name.as_str(),
            item.description.as_str(),
            format!("{:.2}", item.original_area).as_str(),
            item.coefficient.to_string().as_str(),
            format!("{:.2}", item.converted_area).as_str(),
            format!("{cost:.0}").as_str(),
        ])?;
    }

    let c = &result.cost_structure;
    let costs = [
        ("Labor", c.labor),
        ("Rough material", c.rough_material),
        ("Finishing", c.finishing),
        ("Equipment & other construction", c.equipment),
        ("Furniture & amenities", c.furniture),
        ("Design & permits", c.soft),
        ("Contingency", c.contingency),
        ("Total investment", result.total_investment),
    ];
    for (name, amount) in costs {
        writer.write_record(["Cost", name, "", "", "", "", format!("{amount:.0}").as_str()])?;
    }

    let m = &result.materials;
    let materials = [
        ("Bricks", m.bricks, "pcs"),
        ("Sand", m.sand, "m3"),
        ("Stone", m.stone, "m3"),
        ("Cement", m.cement, "kg"),
        ("Steel", m.steel, "kg"),
        ("Paint", m.paint, "m2"),
    ];
    for (name, quantity, unit) in materials {
        writer.write_record([
            "Material",
            name,
            unit,
            "",
            "",
            "",
            quantity.to_string().as_str(),
        ])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
