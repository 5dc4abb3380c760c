use serde::Deserialize;

use newsdesk::common::text::{parse_date, parse_money, split_csv, split_lines};
use newsdesk::models::{
    BankDetails, BlogPostCreate, EmployeeRecordCreate, JobListingCreate, JobType,
    NewsArticleCreate, ProjectAssignmentCreate, ServiceOfferingCreate, SocialLinks,
    TeamMemberCreate, TestimonialCreate,
};

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct AuthQuery {
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub page: Option<usize>,
}

#[derive(Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

// Entity forms. Repeated collections arrive either comma-separated (tags)
// or one entry per line (textareas); `to_create` applies the transforms and
// the model-level validation in one step, so a failed conversion hands the
// untouched form back to the template.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub images: String,
}

impl NewsForm {
    pub fn to_create(&self) -> Result<NewsArticleCreate, String> {
        let data = NewsArticleCreate {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
            category: self.category.trim().to_string(),
            tags: split_csv(&self.tags),
            thumbnail_url: self.thumbnail_url.trim().to_string(),
            images: split_lines(&self.images),
        };
        data.validate()?;
        Ok(data)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub images: String,
}

impl BlogForm {
    pub fn to_create(&self) -> Result<BlogPostCreate, String> {
        let data = BlogPostCreate {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
            author: self.author.trim().to_string(),
            tags: split_csv(&self.tags),
            thumbnail_url: self.thumbnail_url.trim().to_string(),
            images: split_lines(&self.images),
        };
        data.validate()?;
        Ok(data)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub picture_url: String,
}

impl ServiceForm {
    pub fn to_create(&self) -> Result<ServiceOfferingCreate, String> {
        let data = ServiceOfferingCreate {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            picture_url: self.picture_url.trim().to_string(),
        };
        data.validate()?;
        Ok(data)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestimonialForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub profile_picture_url: String,
    #[serde(default)]
    pub rating: String,
}

impl TestimonialForm {
    pub fn to_create(&self) -> Result<TestimonialCreate, String> {
        let data = TestimonialCreate {
            name: self.name.trim().to_string(),
            designation: self.designation.trim().to_string(),
            message: self.message.trim().to_string(),
            profile_picture_url: self.profile_picture_url.trim().to_string(),
            // Out-of-range sentinel; validate() reports the usable range.
            rating: self.rating.trim().parse().unwrap_or(0),
        };
        data.validate()?;
        Ok(data)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub profile_picture_url: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub portfolio: String,
    #[serde(default)]
    pub other_links: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub technologies: String,
}

impl TeamForm {
    pub fn to_create(&self) -> Result<TeamMemberCreate, String> {
        let data = TeamMemberCreate {
            name: self.name.trim().to_string(),
            designation: self.designation.trim().to_string(),
            bio: self.bio.clone(),
            profile_picture_url: self.profile_picture_url.trim().to_string(),
            social_links: SocialLinks {
                linkedin: self.linkedin.trim().to_string(),
                portfolio: self.portfolio.trim().to_string(),
                other_links: split_lines(&self.other_links),
            },
            skills: split_lines(&self.skills),
            technologies: split_lines(&self.technologies),
        };
        data.validate()?;
        Ok(data)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CareerForm {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub application_deadline: String,
    #[serde(default)]
    pub responsibilities: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub tools_and_technologies: String,
}

impl CareerForm {
    pub fn to_create(&self) -> Result<JobListingCreate, String> {
        let job_type: JobType = self
            .job_type
            .parse()
            .map_err(|_| "Job type is required.".to_string())?;

        let data = JobListingCreate {
            job_title: self.job_title.trim().to_string(),
            job_description: self.job_description.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            salary: parse_money(&self.salary),
            job_type,
            application_deadline: parse_date(&self.application_deadline),
            responsibilities: split_lines(&self.responsibilities),
            requirements: split_lines(&self.requirements),
            tools_and_technologies: split_lines(&self.tools_and_technologies),
        };
        data.validate()?;
        Ok(data)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectForm {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub assigned_employees: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub net_revenue: String,
}

impl ProjectForm {
    pub fn to_create(&self) -> Result<ProjectAssignmentCreate, String> {
        let data = ProjectAssignmentCreate {
            project_name: self.project_name.trim().to_string(),
            client_name: self.client_name.trim().to_string(),
            assigned_employees: self.assigned_employees.trim().to_string(),
            start_date: parse_date(&self.start_date),
            deadline: parse_date(&self.deadline),
            budget: parse_money(&self.budget),
            net_revenue: parse_money(&self.net_revenue),
        };
        data.validate()?;
        Ok(data)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeForm {
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub bank_name: String,
    #[serde(default)]
    pub ifsc: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub monthly_performance: String,
    #[serde(default)]
    pub joining_date: String,
}

impl EmployeeForm {
    pub fn to_create(&self) -> Result<EmployeeRecordCreate, String> {
        let data = EmployeeRecordCreate {
            employee_name: self.employee_name.trim().to_string(),
            designation: self.designation.trim().to_string(),
            address: self.address.trim().to_string(),
            skills: self.skills.trim().to_string(),
            salary: parse_money(&self.salary),
            bank_details: BankDetails {
                account_number: self.account_number.trim().to_string(),
                bank_name: self.bank_name.trim().to_string(),
                ifsc: self.ifsc.trim().to_string(),
                branch: self.branch.trim().to_string(),
            },
            monthly_performance: self.monthly_performance.trim().to_string(),
            joining_date: parse_date(&self.joining_date),
        };
        data.validate()?;
        Ok(data)
    }
}
