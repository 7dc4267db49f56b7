use crate::catalog::TemplateCatalog;
use crate::entities::{CleaningZone, Furniture, ItemDescriptor, PlacedItem, RoomConfiguration, RoomTemplate};
use crate::geometry::Rect;
use crate::io::ext_repr::{
    ExtCatalog, ExtCleaningZone, ExtFurniture, ExtItem, ExtItemPosition, ExtRect,
    ExtRoomConfiguration, ExtRoomTemplate,
};

/// Exports a generated room, with its selected items and their positions as parallel lists.
pub fn export_room(room: &RoomConfiguration) -> ExtRoomConfiguration {
    let template = &room.template;
    ExtRoomConfiguration {
        id: template.id.clone(),
        name: template.name.clone(),
        description: template.description.clone(),
        seed: room.seed.value(),
        furniture: template.furniture.iter().map(export_furniture).collect(),
        cleaning_zones: template.cleaning_zones.iter().map(export_cleaning_zone).collect(),
        selected_items: room.selected_items().map(export_item).collect(),
        item_positions: room.placed_items.iter().map(export_position).collect(),
    }
}

pub fn export_catalog(catalog: &TemplateCatalog) -> ExtCatalog {
    ExtCatalog {
        templates: catalog.templates().iter().map(|t| export_template(t)).collect(),
    }
}

pub fn export_template(template: &RoomTemplate) -> ExtRoomTemplate {
    ExtRoomTemplate {
        id: template.id.clone(),
        name: template.name.clone(),
        description: template.description.clone(),
        furniture: template.furniture.iter().map(export_furniture).collect(),
        cleaning_zones: template.cleaning_zones.iter().map(export_cleaning_zone).collect(),
        items: template.item_pool.iter().map(export_item).collect(),
    }
}

fn export_rect(rect: &Rect) -> ExtRect {
    ExtRect {
        x: rect.x_min,
        y: rect.y_min,
        width: rect.width(),
        height: rect.height(),
    }
}

fn export_furniture(furniture: &Furniture) -> ExtFurniture {
    ExtFurniture {
        kind: furniture.kind.clone(),
        rect: export_rect(&furniture.rect),
    }
}

fn export_cleaning_zone(zone: &CleaningZone) -> ExtCleaningZone {
    ExtCleaningZone {
        id: zone.id.clone(),
        rect: export_rect(&zone.rect),
        accepts: zone.accepts.clone(),
    }
}

fn export_item(item: &ItemDescriptor) -> ExtItem {
    ExtItem {
        category: item.category,
        name: item.name.clone(),
        color: item.color.clone(),
        size: item.size.name().to_string(),
    }
}

fn export_position(placed_item: &PlacedItem) -> ExtItemPosition {
    ExtItemPosition {
        rect: export_rect(&placed_item.rect),
        fallback: placed_item.is_fallback(),
    }
}
