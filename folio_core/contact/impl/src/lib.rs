use std::sync::Arc;

use chrono::{DateTime, Utc};
use folio_core_contact_contracts::{ContactSendMessageError, ContactService};
use folio_email_contracts::{ContentType, Email, EmailService};
use folio_models::{contact::ContactSubmission, email_address::EmailAddress};
use folio_shared_contracts::time::TimeService;
use folio_templates_contracts::{ContactMessageTemplate, TemplateService};

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Time, Email, Template> {
    time: Time,
    email: Email,
    template: Template,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    pub recipient: Arc<EmailAddress>,
}

impl<Time, Email, Template> ContactServiceImpl<Time, Email, Template> {
    pub fn new(time: Time, email: Email, template: Template, config: ContactServiceConfig) -> Self {
        Self {
            time,
            email,
            template,
            config,
        }
    }
}

impl<TimeS, EmailS, TemplateS> ContactService for ContactServiceImpl<TimeS, EmailS, TemplateS>
where
    TimeS: TimeService,
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> Result<(), ContactSendMessageError> {
        let now = self.time.now();

        let email = Email {
            recipient: (*self.config.recipient).clone().into(),
            subject: format!("Portfolio Contact: {}", *submission.subject),
            body: self
                .template
                .render(&contact_message_template(&submission, now))?,
            content_type: ContentType::Html,
            reply_to: Some(submission.email.into()),
            from_name: Some(submission.name.into_inner()),
        };

        if !self.email.send(email).await? {
            return Err(ContactSendMessageError::Send);
        }

        Ok(())
    }
}

fn contact_message_template(
    submission: &ContactSubmission,
    now: DateTime<Utc>,
) -> ContactMessageTemplate {
    let initial = submission
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "U".into());

    ContactMessageTemplate {
        name: submission.name.to_string(),
        email: submission.email.to_string(),
        subject: submission.subject.to_string(),
        message: submission.message.to_string(),
        initial,
        date: now.format("%a, %b %-d, %Y").to_string(),
    }
}
