//! Daily meal templates keyed by dietary preference and calorie band.

use crate::models::{MealEntry, MealTemplate};

const fn meal(name: &'static str, calories: u32, macros: &'static str) -> MealEntry {
    MealEntry { name, calories, macros }
}

pub(super) static VEGETARIAN_1500_1800: MealTemplate = MealTemplate {
    breakfast: meal(
        "Oats with Banana & Nuts",
        350,
        "Carbs: 60g, Protein: 12g, Fat: 8g",
    ),
    lunch: meal(
        "Dal Rice with Vegetables",
        500,
        "Carbs: 80g, Protein: 20g, Fat: 10g",
    ),
    dinner: meal(
        "Paneer Curry with Roti",
        450,
        "Carbs: 50g, Protein: 25g, Fat: 15g",
    ),
    snacks: meal(
        "Yogurt with Fruits",
        200,
        "Carbs: 30g, Protein: 10g, Fat: 5g",
    ),
};

pub(super) static VEGETARIAN_1800_2100: MealTemplate = MealTemplate {
    breakfast: meal(
        "Scrambled Eggs (2) with Toast & Avocado",
        400,
        "Carbs: 45g, Protein: 20g, Fat: 18g",
    ),
    lunch: meal(
        "Chickpea Curry with Brown Rice",
        600,
        "Carbs: 90g, Protein: 25g, Fat: 12g",
    ),
    dinner: meal(
        "Tofu Stir Fry with Quinoa",
        550,
        "Carbs: 60g, Protein: 30g, Fat: 15g",
    ),
    snacks: meal(
        "Mixed Nuts & Greek Yogurt",
        250,
        "Carbs: 15g, Protein: 15g, Fat: 18g",
    ),
};

pub(super) static VEGETARIAN_2100_2400: MealTemplate = MealTemplate {
    breakfast: meal(
        "Protein Smoothie Bowl",
        450,
        "Carbs: 60g, Protein: 25g, Fat: 12g",
    ),
    lunch: meal(
        "Paneer Tikka with Rice & Salad",
        650,
        "Carbs: 85g, Protein: 35g, Fat: 18g",
    ),
    dinner: meal(
        "Lentil Curry with Roti & Vegetables",
        600,
        "Carbs: 75g, Protein: 28g, Fat: 15g",
    ),
    snacks: meal(
        "Protein Bar & Apple",
        300,
        "Carbs: 40g, Protein: 20g, Fat: 10g",
    ),
};

pub(super) static VEGETARIAN_2400_2700: MealTemplate = MealTemplate {
    breakfast: meal(
        "Oats with Protein Powder & Berries",
        500,
        "Carbs: 70g, Protein: 30g, Fat: 12g",
    ),
    lunch: meal(
        "Paneer Biryani with Raita",
        750,
        "Carbs: 100g, Protein: 35g, Fat: 20g",
    ),
    dinner: meal(
        "Tofu & Vegetable Curry with Rice",
        700,
        "Carbs: 85g, Protein: 32g, Fat: 18g",
    ),
    snacks: meal(
        "Trail Mix & Protein Shake",
        350,
        "Carbs: 45g, Protein: 25g, Fat: 15g",
    ),
};

pub(super) static NON_VEGETARIAN_1500_1800: MealTemplate = MealTemplate {
    breakfast: meal(
        "Scrambled Eggs (2) with Whole Wheat Toast",
        350,
        "Carbs: 35g, Protein: 20g, Fat: 12g",
    ),
    lunch: meal(
        "Grilled Chicken Breast with Brown Rice & Vegetables",
        500,
        "Carbs: 50g, Protein: 40g, Fat: 10g",
    ),
    dinner: meal(
        "Baked Fish with Quinoa & Steamed Vegetables",
        450,
        "Carbs: 40g, Protein: 35g, Fat: 12g",
    ),
    snacks: meal(
        "Greek Yogurt with Berries",
        200,
        "Carbs: 25g, Protein: 15g, Fat: 5g",
    ),
};

pub(super) static NON_VEGETARIAN_1800_2100: MealTemplate = MealTemplate {
    breakfast: meal(
        "Omelette (3 eggs) with Vegetables & Toast",
        400,
        "Carbs: 30g, Protein: 25g, Fat: 18g",
    ),
    lunch: meal(
        "Grilled Chicken with Sweet Potato & Broccoli",
        600,
        "Carbs: 60g, Protein: 45g, Fat: 15g",
    ),
    dinner: meal(
        "Salmon with Brown Rice & Asparagus",
        550,
        "Carbs: 50g, Protein: 40g, Fat: 18g",
    ),
    snacks: meal(
        "Protein Shake & Almonds",
        250,
        "Carbs: 20g, Protein: 25g, Fat: 12g",
    ),
};

pub(super) static NON_VEGETARIAN_2100_2400: MealTemplate = MealTemplate {
    breakfast: meal(
        "Protein Pancakes with Eggs & Turkey Bacon",
        450,
        "Carbs: 50g, Protein: 30g, Fat: 15g",
    ),
    lunch: meal(
        "Chicken Breast with Rice, Beans & Salad",
        650,
        "Carbs: 70g, Protein: 50g, Fat: 18g",
    ),
    dinner: meal(
        "Lean Beef Steak with Quinoa & Vegetables",
        600,
        "Carbs: 55g, Protein: 45g, Fat: 20g",
    ),
    snacks: meal(
        "Protein Bar & Banana",
        300,
        "Carbs: 40g, Protein: 20g, Fat: 10g",
    ),
};

pub(super) static NON_VEGETARIAN_2400_2700: MealTemplate = MealTemplate {
    breakfast: meal(
        "High Protein Breakfast Bowl (Eggs, Chicken, Avocado)",
        500,
        "Carbs: 40g, Protein: 40g, Fat: 22g",
    ),
    lunch: meal(
        "Chicken & Rice Bowl with Vegetables",
        750,
        "Carbs: 85g, Protein: 55g, Fat: 20g",
    ),
    dinner: meal(
        "Grilled Salmon with Pasta & Vegetables",
        700,
        "Carbs: 70g, Protein: 50g, Fat: 25g",
    ),
    snacks: meal(
        "Protein Shake & Mixed Nuts",
        350,
        "Carbs: 30g, Protein: 30g, Fat: 18g",
    ),
};

pub(super) static VEGAN_1500_1800: MealTemplate = MealTemplate {
    breakfast: meal(
        "Overnight Oats with Chia Seeds & Berries",
        350,
        "Carbs: 65g, Protein: 12g, Fat: 8g",
    ),
    lunch: meal(
        "Lentil Soup with Whole Grain Bread",
        500,
        "Carbs: 75g, Protein: 22g, Fat: 10g",
    ),
    dinner: meal(
        "Tofu Stir Fry with Brown Rice",
        450,
        "Carbs: 55g, Protein: 20g, Fat: 12g",
    ),
    snacks: meal(
        "Hummus with Veggie Sticks",
        200,
        "Carbs: 25g, Protein: 8g, Fat: 8g",
    ),
};

pub(super) static VEGAN_1800_2100: MealTemplate = MealTemplate {
    breakfast: meal(
        "Smoothie Bowl (Banana, Spinach, Protein Powder)",
        400,
        "Carbs: 60g, Protein: 25g, Fat: 10g",
    ),
    lunch: meal(
        "Chickpea & Quinoa Salad",
        600,
        "Carbs: 85g, Protein: 28g, Fat: 15g",
    ),
    dinner: meal(
        "Tempeh with Vegetables & Rice",
        550,
        "Carbs: 65g, Protein: 28g, Fat: 15g",
    ),
    snacks: meal(
        "Almonds & Apple",
        250,
        "Carbs: 30g, Protein: 8g, Fat: 15g",
    ),
};

pub(super) static VEGAN_2100_2400: MealTemplate = MealTemplate {
    breakfast: meal(
        "Vegan Protein Pancakes with Nut Butter",
        450,
        "Carbs: 55g, Protein: 25g, Fat: 18g",
    ),
    lunch: meal(
        "Black Bean Burger with Sweet Potato Fries",
        650,
        "Carbs: 90g, Protein: 30g, Fat: 18g",
    ),
    dinner: meal(
        "Lentil Curry with Quinoa & Vegetables",
        600,
        "Carbs: 80g, Protein: 30g, Fat: 15g",
    ),
    snacks: meal(
        "Vegan Protein Bar & Banana",
        300,
        "Carbs: 45g, Protein: 20g, Fat: 10g",
    ),
};

pub(super) static VEGAN_2400_2700: MealTemplate = MealTemplate {
    breakfast: meal(
        "High Protein Smoothie with Oats",
        500,
        "Carbs: 70g, Protein: 30g, Fat: 12g",
    ),
    lunch: meal(
        "Tofu & Vegetable Bowl with Rice",
        750,
        "Carbs: 100g, Protein: 35g, Fat: 20g",
    ),
    dinner: meal(
        "Lentil Pasta with Vegetables & Sauce",
        700,
        "Carbs: 90g, Protein: 32g, Fat: 18g",
    ),
    snacks: meal(
        "Trail Mix & Protein Shake",
        350,
        "Carbs: 50g, Protein: 25g, Fat: 15g",
    ),
};
