use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use log::warn;

use crate::catalog::TemplateCatalog;
use crate::entities::{CleaningZone, Furniture, ItemDescriptor, RoomTemplate, SizeClass};
use crate::geometry::Rect;
use crate::io::ext_repr::{ExtCatalog, ExtCleaningZone, ExtFurniture, ExtItem, ExtRect, ExtRoomTemplate};

/// Bound on the absolute value of every imported coordinate and dimension
pub const MAX_COORDINATE: i32 = 1 << 20;

/// Converts an external catalog into a validated [`TemplateCatalog`], keeping the template order.
pub fn import_catalog(ext_catalog: &ExtCatalog) -> Result<TemplateCatalog> {
    let templates = ext_catalog
        .templates
        .iter()
        .map(|t| import_template(t).with_context(|| format!("invalid template: {}", t.id)))
        .collect::<Result<Vec<RoomTemplate>>>()?;

    TemplateCatalog::new(templates)
}

pub fn import_template(ext_template: &ExtRoomTemplate) -> Result<RoomTemplate> {
    ensure!(!ext_template.id.is_empty(), "template id cannot be empty");

    let furniture = ext_template
        .furniture
        .iter()
        .map(import_furniture)
        .collect::<Result<Vec<Furniture>>>()?;

    let cleaning_zones = ext_template
        .cleaning_zones
        .iter()
        .map(import_cleaning_zone)
        .collect::<Result<Vec<CleaningZone>>>()?;

    let duplicate_zones = cleaning_zones.iter().map(|z| &z.id).duplicates().collect_vec();
    ensure!(duplicate_zones.is_empty(), "duplicate zone ids: {duplicate_zones:?}");

    let item_pool = ext_template
        .items
        .iter()
        .map(import_item)
        .collect::<Result<Vec<ItemDescriptor>>>()?;

    Ok(RoomTemplate {
        id: ext_template.id.clone(),
        name: ext_template.name.clone(),
        description: ext_template.description.clone(),
        furniture,
        cleaning_zones,
        item_pool,
    })
}

pub fn import_rect(ext_rect: &ExtRect) -> Result<Rect> {
    let ExtRect {
        x,
        y,
        width,
        height,
    } = *ext_rect;
    ensure!(
        [x, y, width, height].iter().all(|v| v.unsigned_abs() <= MAX_COORDINATE as u32),
        "rectangle out of range, x: {x}, y: {y}, width: {width}, height: {height}, limit: {MAX_COORDINATE}"
    );
    Rect::try_from_xywh(x, y, width, height)
}

pub fn import_furniture(ext_furniture: &ExtFurniture) -> Result<Furniture> {
    let rect = import_rect(&ext_furniture.rect)
        .with_context(|| format!("furniture {}", ext_furniture.kind))?;
    Ok(Furniture {
        kind: ext_furniture.kind.clone(),
        rect,
    })
}

pub fn import_cleaning_zone(ext_zone: &ExtCleaningZone) -> Result<CleaningZone> {
    let rect = import_rect(&ext_zone.rect).with_context(|| format!("cleaning zone {}", ext_zone.id))?;
    if ext_zone.accepts.is_empty() {
        warn!("[IMPORT] cleaning zone {} does not accept any items", ext_zone.id);
    }
    Ok(CleaningZone {
        id: ext_zone.id.clone(),
        rect,
        accepts: ext_zone.accepts.iter().copied().unique().collect(),
    })
}

pub fn import_item(ext_item: &ExtItem) -> Result<ItemDescriptor> {
    ensure!(
        is_hex_color(&ext_item.color),
        "item {} has an invalid color: {:?}, expected #RRGGBB",
        ext_item.name,
        ext_item.color
    );
    let size = match SizeClass::from_name(&ext_item.size) {
        Some(size) => size,
        None => {
            warn!(
                "[IMPORT] unknown size {:?} for item {}, using medium",
                ext_item.size, ext_item.name
            );
            SizeClass::Medium
        }
    };
    Ok(ItemDescriptor {
        category: ext_item.category,
        name: ext_item.name.clone(),
        color: ext_item.color.clone(),
        size,
    })
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}
