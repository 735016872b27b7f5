use services::CertificateFields;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateVm {
    pub student_name: String,
    pub course: String,
    pub instructor: String,
    pub institution: String,
    pub issued_on: String,
}

impl From<&CertificateFields> for CertificateVm {
    fn from(fields: &CertificateFields) -> Self {
        Self {
            student_name: fields.student_name.clone(),
            course: fields.course.clone(),
            instructor: fields.instructor.clone(),
            institution: fields.institution.clone(),
            issued_on: fields.issue_date_label(),
        }
    }
}
