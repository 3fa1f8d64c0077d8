//! YouGov survey of American pizza preferences.

use super::{ReferenceDataset, ReferenceEntry};

const FREQUENCY: &[ReferenceEntry] = &[
    ReferenceEntry::new("A few times a week", 14),
    ReferenceEntry::new("A few times a month", 59),
    ReferenceEntry::new("A few times a year", 23),
    ReferenceEntry::new("Once a year or less", 3),
    ReferenceEntry::new("Never", 0),
];

const CRUST_TYPES: &[ReferenceEntry] = &[
    ReferenceEntry::new("Thin crust", 39),
    ReferenceEntry::new("Thick crust", 30),
    ReferenceEntry::new("Stuffed crust", 16),
    ReferenceEntry::new("No preference", 14),
];

const EAT_CRUST: &[ReferenceEntry] = &[
    ReferenceEntry::new("Yes", 79),
    ReferenceEntry::new("No", 19),
];

const CUTTING_STYLES: &[ReferenceEntry] = &[
    ReferenceEntry::new("In triangular slices", 75),
    ReferenceEntry::new("In square slices", 15),
    ReferenceEntry::new("In strips", 5),
];

const EATING_METHODS: &[ReferenceEntry] = &[
    ReferenceEntry::new("With my hands", 73),
    ReferenceEntry::new("With a fork and knife", 11),
    ReferenceEntry::new("Both equally", 15),
];

const SAUCE_AMOUNTS: &[ReferenceEntry] = &[
    ReferenceEntry::new("A lot", 14),
    ReferenceEntry::new("A moderate amount", 62),
    ReferenceEntry::new("A little bit", 21),
    ReferenceEntry::new("No sauce", 2),
];

const REGIONAL_STYLES: &[ReferenceEntry] = &[
    ReferenceEntry::described("New York", 27, "Large slices that are foldable and crispy."),
    ReferenceEntry::described("Chicago", 19, "Deep-dish pizza with a buttery crust."),
    ReferenceEntry::described("Detroit", 4, "Rectangular pizza with caramelized cheese."),
    ReferenceEntry::described("St. Louis", 2, "Distinctive Provel cheese blend."),
    ReferenceEntry::described("Neapolitan", 3, "Traditional Italian style with a soft base."),
    ReferenceEntry::described("Sicilian", 7, "Fluffy, spongy dough with strong cheese."),
    ReferenceEntry::described("California", 8, "Unlikely ingredients and fresh, local produce."),
    ReferenceEntry::described("New Haven", 2, "Oblong shape and charred crust."),
];

const DIPPING_SAUCES: &[ReferenceEntry] = &[
    ReferenceEntry::new("Barbecue sauce", 10),
    ReferenceEntry::new("Blue cheese dressing", 9),
    ReferenceEntry::new("Garlic butter", 23),
    ReferenceEntry::new("Honey", 7),
    ReferenceEntry::new("Hot honey", 8),
    ReferenceEntry::new("Hot sauce", 12),
    ReferenceEntry::new("Ketchup", 10),
    ReferenceEntry::new("Marinara sauce", 23),
    ReferenceEntry::new("Mayonnaise", 7),
    ReferenceEntry::new("Pesto", 7),
    ReferenceEntry::new("Ranch dressing", 22),
    ReferenceEntry::new("Sriracha", 5),
    ReferenceEntry::new("None", 31),
];

const TOPPINGS: &[ReferenceEntry] = &[
    ReferenceEntry::topping("Pepperoni", 50, 24),
    ReferenceEntry::topping("Extra cheese", 51, 11),
    ReferenceEntry::topping("Mushrooms", 41, 9),
    ReferenceEntry::topping("Sausage", 44, 13),
    ReferenceEntry::topping("Onions", 33, 2),
    ReferenceEntry::topping("Bacon", 33, 4),
    ReferenceEntry::topping("Peppers", 34, 4),
    ReferenceEntry::topping("Olives", 31, 2),
    ReferenceEntry::topping("Fresh tomato", 31, 2),
    ReferenceEntry::topping("Fresh garlic", 32, 2),
    ReferenceEntry::topping("Fresh basil", 29, 2),
    ReferenceEntry::topping("Ham", 27, 2),
    ReferenceEntry::topping("Chicken", 25, 6),
    ReferenceEntry::topping("Meatball", 25, 3),
    ReferenceEntry::topping("Pineapple", 22, 4),
    ReferenceEntry::topping("Spinach", 22, 1),
    ReferenceEntry::topping("Jalapeños", 19, 2),
    ReferenceEntry::topping("Salami", 17, 2),
    ReferenceEntry::topping("Anchovies", 10, 1),
    ReferenceEntry::topping("Artichokes", 13, 1),
    ReferenceEntry::topping("Broccoli", 11, 1),
    ReferenceEntry::topping("Eggplant", 9, 1),
];

const LEAST_FAVORITE_TOPPINGS: &[ReferenceEntry] = &[
    ReferenceEntry::new("Anchovies", 29),
    ReferenceEntry::new("Eggplant", 6),
    ReferenceEntry::new("Pineapple", 6),
    ReferenceEntry::new("Broccoli", 5),
    ReferenceEntry::new("Fresh garlic", 4),
    ReferenceEntry::new("Artichokes", 3),
    ReferenceEntry::new("Jalapeños", 8),
    ReferenceEntry::new("Mushrooms", 5),
];

pub static SURVEY: ReferenceDataset = ReferenceDataset {
    frequency: FREQUENCY,
    crust_types: CRUST_TYPES,
    eat_crust: EAT_CRUST,
    cutting_styles: CUTTING_STYLES,
    eating_methods: EATING_METHODS,
    sauce_amounts: SAUCE_AMOUNTS,
    regional_styles: REGIONAL_STYLES,
    dipping_sauces: DIPPING_SAUCES,
    toppings: TOPPINGS,
    least_favorite_toppings: LEAST_FAVORITE_TOPPINGS,
};
