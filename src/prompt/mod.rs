use crate::wire::{GenerationMode, RecipeRequest};

/// Assemble the generation prompt. Clause order matters to the model, so
/// the pieces are appended in a fixed sequence: the base instruction, the
/// dish or ingredients clause, any optional constraints, and the closing
/// language instruction last.
pub fn build_prompt(req: &RecipeRequest) -> String {
    let mut prompt = String::from("You are a creative chef. Generate a detailed recipe.");

    match req.mode {
        GenerationMode::Dish => {
            prompt.push_str(&format!(" The requested dish is \"{}\".", req.dish_name));
        }
        GenerationMode::Ingredients => {
            prompt.push_str(&format!(
                " The recipe must use the following ingredients: {}. You can add a few common pantry staples if necessary.",
                req.ingredients.join(", ")
            ));
        }
    }

    if !req.equipment.is_empty() {
        prompt.push_str(&format!(
            " The user has the following kitchen equipment available: {}. The recipe should only use this equipment.",
            req.equipment.join(", ")
        ));
    }

    if req.meal_type != "Any" {
        prompt.push_str(&format!(" This recipe is for {}.", req.meal_type));
    }

    if !req.dietary_restrictions.is_empty() {
        prompt.push_str(&format!(
            " Please adhere to the following dietary restrictions: {}.",
            req.dietary_restrictions
        ));
    }

    prompt.push_str(&format!(
        " The response must be in the {} language. The recipe name should be appealing. The instructions should be clear and easy to follow.",
        req.language
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> RecipeRequest {
        RecipeRequest {
            mode: GenerationMode::Ingredients,
            ingredients: vec!["egg".into(), "flour".into()],
            dish_name: String::new(),
            equipment: vec![],
            meal_type: "Any".into(),
            dietary_restrictions: String::new(),
            language: "en".into(),
        }
    }

    #[test]
    fn ingredients_mode_joins_in_order() {
        let prompt = build_prompt(&base_request());
        assert!(prompt.contains("must use the following ingredients: egg, flour."));
        assert!(prompt.contains("common pantry staples"));
        assert!(!prompt.contains("The requested dish is"));
    }

    #[test]
    fn bare_request_has_no_optional_clauses() {
        let prompt = build_prompt(&base_request());
        assert!(!prompt.contains("kitchen equipment"));
        assert!(!prompt.contains("This recipe is for"));
        assert!(!prompt.contains("dietary restrictions"));
        assert!(prompt.contains("The response must be in the en language."));
    }

    #[test]
    fn dish_mode_names_the_dish_and_skips_ingredients() {
        let mut req = base_request();
        req.mode = GenerationMode::Dish;
        req.dish_name = "Pad Thai".into();
        req.equipment = vec!["wok".into()];
        req.meal_type = "Dinner".into();
        req.dietary_restrictions = "nut-free".into();
        req.language = "es".into();

        let prompt = build_prompt(&req);
        assert!(prompt.contains("The requested dish is \"Pad Thai\"."));
        assert!(!prompt.contains("must use the following ingredients"));
        assert!(prompt.contains("kitchen equipment available: wok."));
        assert!(prompt.contains("should only use this equipment"));
        assert!(prompt.contains("This recipe is for Dinner."));
        assert!(prompt.contains("dietary restrictions: nut-free."));
        assert!(prompt.contains("The response must be in the es language."));
    }

    #[test]
    fn any_meal_type_adds_no_clause() {
        let mut req = base_request();
        req.meal_type = "Any".into();
        assert!(!build_prompt(&req).contains("This recipe is for"));

        req.meal_type = "Breakfast".into();
        assert!(build_prompt(&req).contains("This recipe is for Breakfast."));
    }

    #[test]
    fn equipment_list_is_comma_joined() {
        let mut req = base_request();
        req.equipment = vec!["air fryer".into(), "blender".into()];
        let prompt = build_prompt(&req);
        assert!(prompt.contains("equipment available: air fryer, blender."));
    }

    #[test]
    fn dietary_restrictions_appear_verbatim() {
        let mut req = base_request();
        req.dietary_restrictions = "vegan, no soy".into();
        let prompt = build_prompt(&req);
        assert!(prompt.contains("Please adhere to the following dietary restrictions: vegan, no soy."));
    }

    #[test]
    fn clauses_keep_their_relative_order() {
        let mut req = base_request();
        req.equipment = vec!["wok".into()];
        req.meal_type = "Dinner".into();
        req.dietary_restrictions = "nut-free".into();
        let prompt = build_prompt(&req);

        let equipment = prompt.find("kitchen equipment").unwrap();
        let meal = prompt.find("This recipe is for").unwrap();
        let diet = prompt.find("dietary restrictions").unwrap();
        let language = prompt.find("The response must be in").unwrap();
        assert!(equipment < meal && meal < diet && diet < language);
    }
}
