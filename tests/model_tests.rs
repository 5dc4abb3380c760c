mod common;

#[cfg(test)]
pub mod model_tests {
    use std::str::FromStr;

    use super::common::*;

    use newsdesk::models::*;

    #[test]
    fn test_news_create_validate_success() {
        let data = get_seed_news_create();
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_news_create_validate_fails_on_blank_title() {
        let data = NewsArticleCreate {
            title: "   ".to_string(),
            ..get_seed_news_create()
        };

        assert_eq!(data.validate(), Err("Title is required.".to_string()));
    }

    #[test]
    fn test_news_create_validate_fails_on_blank_content() {
        let data = NewsArticleCreate {
            content: String::new(),
            ..get_seed_news_create()
        };

        assert_eq!(data.validate(), Err("Content is required.".to_string()));
    }

    #[test]
    fn test_news_create_validate_fails_on_unknown_category() {
        let data = NewsArticleCreate {
            category: "Weather".to_string(),
            ..get_seed_news_create()
        };

        assert!(data.validate().is_err());
    }

    #[test]
    fn test_news_category_list_membership() {
        assert!(is_news_category("भारत"));
        assert!(is_news_category("खेल"));
        assert!(!is_news_category(""));
        assert!(!is_news_category("Sports"));
    }

    #[test]
    fn test_news_create_json_defaults() {
        let data: NewsArticleCreate = serde_json::from_str(
            r#"{"title": "T", "content": "C", "category": "खेल"}"#,
        )
        .expect("minimal payload should deserialize");

        assert!(data.tags.is_empty());
        assert!(data.images.is_empty());
        assert!(data.thumbnail_url.is_empty());
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_blog_create_author_defaults_to_anonymous() {
        let data = BlogPostCreate {
            author: "  ".to_string(),
            ..get_seed_blog_create()
        };

        assert_eq!(data.author_or_default(), "Anonymous");

        let data = BlogPostCreate {
            author: "Meera".to_string(),
            ..get_seed_blog_create()
        };

        assert_eq!(data.author_or_default(), "Meera");
    }

    #[test]
    fn test_blog_create_json_author_default() {
        let data: BlogPostCreate =
            serde_json::from_str(r#"{"title": "T", "content": "C"}"#)
                .expect("minimal payload should deserialize");

        assert_eq!(data.author, "Anonymous");
    }

    #[test]
    fn test_testimonial_rating_bounds() {
        let ok = get_seed_testimonial_create();
        assert!(ok.validate().is_ok());

        let low = TestimonialCreate {
            rating: 0,
            ..get_seed_testimonial_create()
        };
        assert!(low.validate().is_err());

        let high = TestimonialCreate {
            rating: 6,
            ..get_seed_testimonial_create()
        };
        assert!(high.validate().is_err());

        for rating in MIN_RATING..=MAX_RATING {
            let data = TestimonialCreate {
                rating,
                ..get_seed_testimonial_create()
            };
            assert!(data.validate().is_ok());
        }
    }

    #[test]
    fn test_team_create_requires_name_and_designation() {
        assert!(get_seed_team_create().validate().is_ok());

        let unnamed = TeamMemberCreate {
            name: String::new(),
            ..get_seed_team_create()
        };
        assert!(unnamed.validate().is_err());

        let undesignated = TeamMemberCreate {
            designation: "  ".to_string(),
            ..get_seed_team_create()
        };
        assert!(undesignated.validate().is_err());
    }

    #[test]
    fn test_job_create_requires_title_and_description() {
        assert!(get_seed_job_create().validate().is_ok());

        let untitled = JobListingCreate {
            job_title: String::new(),
            ..get_seed_job_create()
        };
        assert!(untitled.validate().is_err());

        let undescribed = JobListingCreate {
            job_description: " ".to_string(),
            ..get_seed_job_create()
        };
        assert!(undescribed.validate().is_err());
    }

    #[test]
    fn test_project_create_requires_names() {
        assert!(get_seed_project_create().validate().is_ok());

        let unnamed = ProjectAssignmentCreate {
            project_name: String::new(),
            ..get_seed_project_create()
        };
        assert!(unnamed.validate().is_err());

        let clientless = ProjectAssignmentCreate {
            client_name: String::new(),
            ..get_seed_project_create()
        };
        assert!(clientless.validate().is_err());
    }

    #[test]
    fn test_employee_create_requires_name_and_designation() {
        assert!(get_seed_employee_create().validate().is_ok());

        let unnamed = EmployeeRecordCreate {
            employee_name: String::new(),
            ..get_seed_employee_create()
        };
        assert!(unnamed.validate().is_err());
    }

    #[test]
    fn test_job_type_labels_round_trip() {
        for jt in JobType::all() {
            assert_eq!(JobType::from_str(jt.as_str()), Ok(*jt));
        }
    }

    #[test]
    fn test_job_type_from_str_is_case_insensitive() {
        assert_eq!(JobType::from_str("full-time"), Ok(JobType::FullTime));
        assert_eq!(JobType::from_str("FULL-TIME"), Ok(JobType::FullTime));
        assert_eq!(JobType::from_str(" Contract "), Ok(JobType::Contract));
    }

    #[test]
    fn test_job_type_from_str_rejects_unknown() {
        assert!(JobType::from_str("").is_err());
        assert!(JobType::from_str("freelance").is_err());
    }

    #[test]
    fn test_job_type_serializes_as_label() {
        let json = serde_json::to_string(&JobType::PartTime).unwrap();
        assert_eq!(json, "\"Part-time\"");

        let parsed: JobType = serde_json::from_str("\"Full-time\"").unwrap();
        assert_eq!(parsed, JobType::FullTime);
    }

    #[test]
    fn test_team_member_json_nests_social_links() {
        let data = get_seed_team_create();
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(
            json["social_links"]["linkedin"],
            "https://linkedin.com/in/ravi"
        );
        assert_eq!(json["social_links"]["other_links"][0], "https://ravi.example");
    }

    #[test]
    fn test_employee_json_nests_bank_details() {
        let data = get_seed_employee_create();
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["bank_details"]["ifsc"], "SBIN0000001");
        assert_eq!(json["bank_details"]["bank_name"], "SBI");
    }
}
