use super::*;

#[test]
fn test_two_concepts_from_conjunction() {
    let interpreted = interpret("marketing and finance expertise");

    assert_eq!(
        interpreted.concepts,
        vec![ConceptPhrase::part("marketing"), ConceptPhrase::part("finance")]
    );
}

#[test]
fn test_single_concept() {
    let interpreted = interpret("marketing");
    assert_eq!(interpreted.concepts, vec![ConceptPhrase::whole("marketing")]);
}

#[test]
fn test_filler_prefix_is_stripped() {
    let interpreted = interpret("I am looking for the person who is good at Digital Marketing");
    assert_eq!(interpreted.normalized, "digital marketing");
    assert_eq!(interpreted.concepts.len(), 1);

    assert_eq!(normalize_query("Someone with Python"), "python");
    assert_eq!(
        normalize_query("I am looking for someone who is good at sales"),
        "sales"
    );
    assert_eq!(
        normalize_query("i am looking for the pearson who is good at java"),
        "java"
    );
}

#[test]
fn test_filler_then_conjunction() {
    let interpreted = interpret("I am looking for someone with sales and marketing skills");
    assert_eq!(
        interpreted.concepts,
        vec![ConceptPhrase::part("sales"), ConceptPhrase::part("marketing")]
    );
}

#[test]
fn test_short_side_falls_back_to_single_phrase() {
    let interpreted = interpret("ai and ml");
    assert_eq!(interpreted.concepts, vec![ConceptPhrase::whole("ai and ml")]);

    let interpreted = interpret("research and qa");
    assert_eq!(interpreted.concepts.len(), 1);
}

#[test]
fn test_side_length_is_checked_before_filler_stripping() {
    let interpreted = interpret("go skills and ml skills");
    assert_eq!(
        interpreted.concepts,
        vec![ConceptPhrase::part("go"), ConceptPhrase::part("ml")]
    );
    assert_eq!(
        interpreted.embedding_inputs(),
        vec![
            "query: go expertise and skills".to_string(),
            "query: ml expertise and skills".to_string(),
        ]
    );
}

#[test]
fn test_filler_only_side_is_kept() {
    let concepts = decompose("skills and marketing experience");
    assert_eq!(
        concepts,
        vec![ConceptPhrase::part("skills"), ConceptPhrase::part("marketing")]
    );
}

#[test]
fn test_conjunction_without_second_side_is_single_phrase() {
    let interpreted = interpret("sales and");
    assert_eq!(interpreted.concepts, vec![ConceptPhrase::whole("sales and")]);
}

#[test]
fn test_only_first_two_sides_are_used() {
    let concepts = decompose("java and python and rust");
    assert_eq!(
        concepts,
        vec![ConceptPhrase::part("java"), ConceptPhrase::part("python")]
    );
}

#[test]
fn test_conjunction_inside_word_does_not_split() {
    let concepts = decompose("brand management");
    assert_eq!(concepts, vec![ConceptPhrase::whole("brand management")]);
}

#[test]
fn test_embedding_inputs() {
    assert_eq!(
        interpret("marketing and finance").embedding_inputs(),
        vec![
            "query: marketing expertise and skills".to_string(),
            "query: finance expertise and skills".to_string(),
        ]
    );
    assert_eq!(
        interpret("Data Science").embedding_inputs(),
        vec!["query: data science".to_string()]
    );
}

#[test]
fn test_experience_range() {
    assert_eq!(
        extract_constraint("2-5 years experience in sales"),
        ExperienceConstraint::Range { min: 2, max: 5 }
    );
    assert_eq!(
        extract_constraint("3 to 6 years in finance"),
        ExperienceConstraint::Range { min: 3, max: 6 }
    );
}

#[test]
fn test_experience_minimum() {
    assert_eq!(
        extract_constraint("above 3 years"),
        ExperienceConstraint::Minimum(3)
    );
    assert_eq!(extract_constraint("3+ years"), ExperienceConstraint::Minimum(3));
    assert_eq!(
        extract_constraint("2 plus years of sales"),
        ExperienceConstraint::Minimum(2)
    );
    assert_eq!(
        extract_constraint("at least 4 years"),
        ExperienceConstraint::Minimum(4)
    );
    assert_eq!(
        extract_constraint("atleast 1 year"),
        ExperienceConstraint::Minimum(1)
    );
    assert_eq!(
        extract_constraint("More Than 7 Years"),
        ExperienceConstraint::Minimum(7)
    );
    assert_eq!(
        extract_constraint("minimum 2 years java"),
        ExperienceConstraint::Minimum(2)
    );
}

#[test]
fn test_experience_exact() {
    assert_eq!(extract_constraint("5 years"), ExperienceConstraint::Exact(5));
    assert_eq!(
        extract_constraint("marketing with 1 year of experience"),
        ExperienceConstraint::Exact(1)
    );
}

#[test]
fn test_experience_none() {
    assert_eq!(
        extract_constraint("senior professional"),
        ExperienceConstraint::None
    );
    assert_eq!(
        extract_constraint("6 months internship"),
        ExperienceConstraint::None
    );
}

#[test]
fn test_experience_first_rule_wins() {
    assert_eq!(
        extract_constraint("3+ years or 2-4 years"),
        ExperienceConstraint::Range { min: 2, max: 4 }
    );
    assert_eq!(
        extract_constraint("5 years, above 2 years"),
        ExperienceConstraint::Minimum(2)
    );
}

#[test]
fn test_experience_overflowing_number_is_none() {
    assert_eq!(
        extract_constraint("99999999999 years"),
        ExperienceConstraint::None
    );
}

#[test]
fn test_experience_read_from_raw_query() {
    let interpreted = interpret("I am looking for someone with 2-5 years experience in sales");
    assert!(interpreted.has_experience_constraint());
    assert_eq!(
        interpreted.experience,
        ExperienceConstraint::Range { min: 2, max: 5 }
    );
    assert_eq!(
        interpreted.normalized,
        "2-5 years experience in sales"
    );
}
