use svg::Document;
use svg::node::element::{Group, Line, Rectangle, Title};

use crate::entities::RoomConfiguration;
use crate::geometry::Rect;
use crate::io::svg::svg_util::{SvgDrawOptions, change_brightness};

/// Fraction of the canvas height above the floor
const WALL_FRACTION: f32 = 2.0 / 3.0;

/// Renders a preview of a generated room: walls and floor, furniture, cleaning zones and the scattered items.
pub fn room_to_svg(room: &RoomConfiguration, options: SvgDrawOptions) -> Document {
    let theme = &options.theme;
    let canvas = room.canvas;
    let stroke_width = theme.stroke_width;

    let floor_y = canvas.y_min + (canvas.height() as f32 * WALL_FRACTION) as i32;

    let background = Group::new()
        .set("id", "background")
        .add(rect_element(&canvas).set("fill", theme.wall_fill.to_string()))
        .add(
            Rectangle::new()
                .set("x", canvas.x_min)
                .set("y", floor_y)
                .set("width", canvas.width())
                .set("height", canvas.y_max - floor_y)
                .set("fill", theme.floor_fill.to_string()),
        );

    let furniture_group = room.furniture().iter().fold(
        Group::new().set("id", "furniture"),
        |group, f| {
            group.add(
                Group::new()
                    .add(Title::new(format!(
                        "{}, [x: {}, y: {}, w: {}, h: {}]",
                        f.kind,
                        f.rect.x_min,
                        f.rect.y_min,
                        f.rect.width(),
                        f.rect.height()
                    )))
                    .add(
                        rect_element(&f.rect)
                            .set("fill", theme.furniture_fill.to_string())
                            .set("stroke", "black")
                            .set("stroke-width", stroke_width),
                    ),
            )
        },
    );

    let mut document = Document::new()
        .set(
            "viewBox",
            (canvas.x_min, canvas.y_min, canvas.width(), canvas.height()),
        )
        .add(Title::new(format!(
            "{}, seed: {}, {} items",
            room.template.name,
            room.seed,
            room.n_items()
        )))
        .add(background)
        .add(furniture_group);

    if options.cleaning_zones {
        let zone_group = room.cleaning_zones().iter().fold(
            Group::new().set("id", "cleaning_zones"),
            |group, zone| {
                let accepts = zone.accepts.iter().map(|c| c.to_string()).collect::<Vec<_>>();
                group.add(
                    Group::new()
                        .add(Title::new(format!("zone {}, accepts: [{}]", zone.id, accepts.join(", "))))
                        .add(
                            rect_element(&zone.rect)
                                .set("fill", theme.zone_fill.to_string())
                                .set("fill-opacity", theme.zone_opacity)
                                .set("stroke", change_brightness(&theme.zone_fill.to_string(), 0.5))
                                .set("stroke-dasharray", "6 4")
                                .set("stroke-width", stroke_width),
                        ),
                )
            },
        );
        document = document.add(zone_group);
    }

    if let Some(cell_size) = options.grid_cell_size.filter(|&c| c > 0) {
        let mut grid_group = Group::new()
            .set("id", "occupancy_grid")
            .set("stroke", "black")
            .set("stroke-opacity", 0.15f32)
            .set("stroke-width", stroke_width / 4.0);
        for x in (canvas.x_min..=canvas.x_max).step_by(cell_size as usize) {
            grid_group = grid_group.add(line(x, canvas.y_min, x, canvas.y_max));
        }
        for y in (canvas.y_min..=canvas.y_max).step_by(cell_size as usize) {
            grid_group = grid_group.add(line(canvas.x_min, y, canvas.x_max, y));
        }
        document = document.add(grid_group);
    }

    let item_group = room.placed_items.iter().enumerate().fold(
        Group::new().set("id", "items"),
        |group, (i, pi)| {
            let outline = match pi.is_fallback() && options.highlight_fallbacks {
                true => (theme.fallback_stroke.to_string(), 2.0 * stroke_width),
                false => (change_brightness(&pi.item.color, 0.6), stroke_width / 2.0),
            };
            group.add(
                Group::new()
                    .set("id", format!("item_{i}"))
                    .add(Title::new(format!(
                        "{} ({}, {}), [x: {}, y: {}]{}",
                        pi.item.name,
                        pi.item.category,
                        pi.item.size.name(),
                        pi.rect.x_min,
                        pi.rect.y_min,
                        if pi.is_fallback() { ", fallback" } else { "" }
                    )))
                    .add(
                        rect_element(&pi.rect)
                            .set("rx", 4)
                            .set("fill", pi.item.color.as_str())
                            .set("stroke", outline.0)
                            .set("stroke-width", outline.1),
                    ),
            )
        },
    );

    document.add(item_group)
}

fn rect_element(rect: &Rect) -> Rectangle {
    Rectangle::new()
        .set("x", rect.x_min)
        .set("y", rect.y_min)
        .set("width", rect.width())
        .set("height", rect.height())
}

fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
}
