use uuid::Uuid;

pub struct UpdateChefProfileInput {
    pub mobile: Option<String>,
    pub speciality: Option<String>,
    pub hourly_rate: Option<i64>,
    pub image: Option<String>,
    pub badges: Option<Vec<String>>,
}

pub struct ApplyAsChefInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub specialty: String,
    pub years_experience: i32,
    pub resume_data: Option<String>,
    pub resume_name: Option<String>,
}

pub struct ApproveApplicationInput {
    pub application_id: Uuid,
    pub hourly_rate: Option<i64>,
}
