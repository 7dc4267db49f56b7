use crate::entities::ItemCategory::{
    Bedding, Books, Clothes, Dishes, Electronics, Food, General, Trash, Utensils,
};
use crate::entities::SizeClass::{Large, Medium, Small};
use crate::entities::{
    CleaningZone, Furniture, ItemCategory, ItemDescriptor, RoomTemplate, SizeClass,
};
use crate::geometry::{Point, Rect};

pub fn templates() -> Vec<RoomTemplate> {
    vec![bedroom(), kitchen(), living_room()]
}

fn bedroom() -> RoomTemplate {
    RoomTemplate {
        id: "bedroom".into(),
        name: "Bedroom".into(),
        description: "A cozy bedroom that needs tidying up".into(),
        furniture: vec![
            furniture("bed", 50, 300, 200, 100),
            furniture("dresser", 600, 250, 150, 150),
            furniture("nightstand", 270, 320, 60, 60),
            furniture("closet", 20, 50, 100, 200),
        ],
        cleaning_zones: vec![
            zone("bed", 50, 300, 200, 100, &[Bedding]),
            zone("dresser", 600, 250, 150, 150, &[General, Clothes]),
            zone("hamper", 400, 450, 60, 70, &[Clothes]),
            zone("trash", 700, 450, 50, 80, &[Trash]),
        ],
        item_pool: vec![
            item(Bedding, "Pillow", "#F0F8FF", Medium),
            item(Bedding, "Blanket", "#87CEEB", Large),
            item(Bedding, "Sheet", "#FFFFFF", Large),
            item(Clothes, "T-Shirt", "#4169E1", Medium),
            item(Clothes, "Jeans", "#000080", Medium),
            item(Clothes, "Socks", "#FFFFFF", Small),
            item(Clothes, "Underwear", "#FF69B4", Small),
            item(Clothes, "Hoodie", "#808080", Large),
            item(General, "Book", "#8B4513", Small),
            item(General, "Phone Charger", "#000000", Small),
            item(General, "Headphones", "#2F4F4F", Small),
            item(General, "Water Bottle", "#00BFFF", Medium),
            item(General, "Notebook", "#FFE4B5", Small),
            item(General, "Pen", "#0000FF", Small),
            item(General, "Keys", "#C0C0C0", Small),
            item(General, "Wallet", "#8B4513", Small),
            item(General, "Sunglasses", "#000000", Small),
            item(General, "Watch", "#C0C0C0", Small),
            item(Trash, "Tissue", "#F5F5F5", Small),
            item(Trash, "Candy Wrapper", "#FFD700", Small),
            item(Trash, "Receipt", "#FFFFFF", Small),
            item(Trash, "Empty Cup", "#FFFFFF", Medium),
            item(Trash, "Food Container", "#FF6B35", Medium),
        ],
    }
}

fn kitchen() -> RoomTemplate {
    RoomTemplate {
        id: "kitchen".into(),
        name: "Kitchen".into(),
        description: "A busy kitchen that needs cleaning".into(),
        furniture: vec![
            furniture("counter", 50, 350, 300, 80),
            furniture("sink", 400, 350, 100, 80),
            furniture("stove", 550, 350, 100, 80),
            furniture("fridge", 700, 200, 80, 200),
            furniture("table", 200, 500, 150, 80),
        ],
        cleaning_zones: vec![
            zone("sink", 400, 350, 100, 80, &[Dishes]),
            zone("counter", 50, 350, 300, 80, &[General, Utensils]),
            zone("fridge", 700, 200, 80, 200, &[Food]),
            zone("trash", 20, 450, 50, 80, &[Trash]),
        ],
        item_pool: vec![
            item(Dishes, "Dirty Plate", "#F5F5DC", Medium),
            item(Dishes, "Coffee Mug", "#8B4513", Small),
            item(Dishes, "Bowl", "#FFFFFF", Medium),
            item(Dishes, "Fork", "#C0C0C0", Small),
            item(Dishes, "Knife", "#C0C0C0", Small),
            item(Dishes, "Spoon", "#C0C0C0", Small),
            item(Dishes, "Glass", "#E6E6FA", Small),
            item(Food, "Apple", "#FF0000", Small),
            item(Food, "Banana", "#FFFF00", Small),
            item(Food, "Milk Carton", "#FFFFFF", Medium),
            item(Food, "Bread", "#DEB887", Medium),
            item(General, "Dish Towel", "#87CEEB", Small),
            item(General, "Oven Mitt", "#FF6347", Small),
            item(General, "Recipe Card", "#FFFACD", Small),
            item(General, "Salt Shaker", "#FFFFFF", Small),
            item(General, "Pepper Shaker", "#000000", Small),
            item(Trash, "Pizza Box", "#FF6B35", Large),
            item(Trash, "Soda Can", "#FF0000", Small),
            item(Trash, "Food Wrapper", "#FFD700", Small),
            item(Trash, "Paper Napkin", "#F5F5F5", Small),
            item(Trash, "Takeout Container", "#FFFFFF", Medium),
            item(Trash, "Coffee Filter", "#8B4513", Small),
            item(Trash, "Banana Peel", "#FFFF00", Small),
        ],
    }
}

fn living_room() -> RoomTemplate {
    RoomTemplate {
        id: "living_room".into(),
        name: "Living Room".into(),
        description: "A comfortable living room that needs organizing".into(),
        furniture: vec![
            furniture("couch", 100, 300, 200, 100),
            furniture("coffee_table", 150, 420, 100, 60),
            furniture("tv_stand", 500, 250, 150, 80),
            furniture("bookshelf", 50, 50, 80, 200),
            furniture("side_table", 320, 320, 50, 50),
        ],
        cleaning_zones: vec![
            zone("bookshelf", 50, 50, 80, 200, &[General, Books]),
            zone("coffee_table", 150, 420, 100, 60, &[General]),
            zone("tv_stand", 500, 250, 150, 80, &[Electronics]),
            zone("trash", 700, 450, 50, 80, &[Trash]),
        ],
        item_pool: vec![
            item(Books, "Novel", "#8B4513", Small),
            item(Books, "Magazine", "#FF69B4", Small),
            item(Books, "Newspaper", "#D3D3D3", Medium),
            item(Books, "Comic Book", "#FF6347", Small),
            item(Electronics, "TV Remote", "#2F4F4F", Small),
            item(Electronics, "Game Controller", "#000000", Medium),
            item(Electronics, "Phone Charger", "#FFFFFF", Small),
            item(Electronics, "Tablet", "#C0C0C0", Medium),
            item(Electronics, "Headphones", "#000000", Medium),
            item(General, "Throw Pillow", "#87CEEB", Medium),
            item(General, "Blanket", "#DDA0DD", Large),
            item(General, "Coaster", "#8B4513", Small),
            item(General, "Candle", "#FFE4B5", Small),
            item(General, "Picture Frame", "#C0C0C0", Small),
            item(General, "Plant Pot", "#228B22", Medium),
            item(General, "Vase", "#E6E6FA", Medium),
            item(Trash, "Popcorn Bowl", "#FFFF00", Medium),
            item(Trash, "Soda Bottle", "#00BFFF", Medium),
            item(Trash, "Chip Bag", "#FFD700", Medium),
            item(Trash, "Tissue", "#F5F5F5", Small),
            item(Trash, "Candy Wrapper", "#FF1493", Small),
            item(Trash, "Paper Plate", "#FFFFFF", Medium),
            item(Trash, "Napkin", "#F5F5F5", Small),
        ],
    }
}

fn furniture(kind: &str, x: i32, y: i32, width: i32, height: i32) -> Furniture {
    Furniture {
        kind: kind.into(),
        rect: Rect::from_origin(Point(x, y), width, height),
    }
}

fn zone(id: &str, x: i32, y: i32, width: i32, height: i32, accepts: &[ItemCategory]) -> CleaningZone {
    CleaningZone {
        id: id.into(),
        rect: Rect::from_origin(Point(x, y), width, height),
        accepts: accepts.to_vec(),
    }
}

fn item(category: ItemCategory, name: &str, color: &str, size: SizeClass) -> ItemDescriptor {
    ItemDescriptor::new(category, name, color, size)
}
