use chrono::{DateTime, Utc};
use uuid::Uuid;

use newsdesk::models::*;

const SQL_TIME_FMT: &str = "%Y-%m-%d %H:%M:%S%#z";

#[allow(dead_code)]
pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(s, SQL_TIME_FMT)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

#[allow(dead_code)]
pub fn get_seed_news_create() -> NewsArticleCreate {
    NewsArticleCreate {
        title: "चुनाव परिणाम".to_string(),
        content: "<p>पूरी कहानी</p>".to_string(),
        category: "भारत".to_string(),
        tags: vec!["elections".to_string(), "politics".to_string()],
        thumbnail_url: "/uploads/thumb.png".to_string(),
        images: vec!["/uploads/a.png".to_string(), "/uploads/b.png".to_string()],
    }
}

#[allow(dead_code)]
pub fn get_seed_news_article() -> NewsArticle {
    NewsArticle {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000000").unwrap(),
        title: "चुनाव परिणाम".to_string(),
        content: "<p>पूरी कहानी</p>".to_string(),
        category: "भारत".to_string(),
        tags: vec!["elections".to_string()],
        thumbnail_url: String::new(),
        images: Vec::new(),
        created_at: parse_time("2026-01-04 22:15:06+00"),
        edited_at: parse_time("2026-01-04 22:15:06+00"),
    }
}

#[allow(dead_code)]
pub fn get_seed_blog_create() -> BlogPostCreate {
    BlogPostCreate {
        title: "Behind the newsroom".to_string(),
        content: "<p>How we publish</p>".to_string(),
        author: "Anonymous".to_string(),
        tags: vec!["newsroom".to_string()],
        thumbnail_url: String::new(),
        images: Vec::new(),
    }
}

#[allow(dead_code)]
pub fn get_seed_testimonial_create() -> TestimonialCreate {
    TestimonialCreate {
        name: "Asha Verma".to_string(),
        designation: "Producer".to_string(),
        message: "A pleasure to work with.".to_string(),
        profile_picture_url: String::new(),
        rating: 5,
    }
}

#[allow(dead_code)]
pub fn get_seed_team_create() -> TeamMemberCreate {
    TeamMemberCreate {
        name: "Ravi Kumar".to_string(),
        designation: "Video Editor".to_string(),
        bio: "Cuts the evening bulletins.".to_string(),
        profile_picture_url: String::new(),
        social_links: SocialLinks {
            linkedin: "https://linkedin.com/in/ravi".to_string(),
            portfolio: String::new(),
            other_links: vec!["https://ravi.example".to_string()],
        },
        skills: vec!["editing".to_string(), "color grading".to_string()],
        technologies: vec!["premiere".to_string()],
    }
}

#[allow(dead_code)]
pub fn get_seed_job_create() -> JobListingCreate {
    JobListingCreate {
        job_title: "Broadcast Engineer".to_string(),
        job_description: "Keep the studio on air.".to_string(),
        company: "NewsNation".to_string(),
        location: "Mumbai".to_string(),
        salary: Some(90_000),
        job_type: JobType::FullTime,
        application_deadline: None,
        responsibilities: vec!["Maintain studio equipment".to_string()],
        requirements: vec!["3+ years broadcast experience".to_string()],
        tools_and_technologies: vec!["vMix".to_string()],
    }
}

#[allow(dead_code)]
pub fn get_seed_project_create() -> ProjectAssignmentCreate {
    ProjectAssignmentCreate {
        project_name: "Election night graphics".to_string(),
        client_name: "Newsroom".to_string(),
        assigned_employees: "Ravi, Asha".to_string(),
        start_date: None,
        deadline: None,
        budget: Some(250_000),
        net_revenue: None,
    }
}

#[allow(dead_code)]
pub fn get_seed_employee_create() -> EmployeeRecordCreate {
    EmployeeRecordCreate {
        employee_name: "Meera Iyer".to_string(),
        designation: "Reporter".to_string(),
        address: "Delhi".to_string(),
        skills: "Field reporting".to_string(),
        salary: Some(60_000),
        bank_details: BankDetails {
            account_number: "0011223344".to_string(),
            bank_name: "SBI".to_string(),
            ifsc: "SBIN0000001".to_string(),
            branch: "Connaught Place".to_string(),
        },
        monthly_performance: "Exceeds".to_string(),
        joining_date: None,
    }
}
