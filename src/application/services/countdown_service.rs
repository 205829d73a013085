use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use std::sync::Arc;
use tracing::{debug, info};

use super::remainder_formatter::time_until;
use crate::application::messages;
use crate::domain::repositories::birthday_repository::Result;
use crate::domain::{
    Birthday, BirthdayRepository, CustomDate, CustomDateRepository, DateSpec, Holiday,
};

const MAX_SUGGESTIONS: usize = 3;

/// What a /birthday invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthdayRequest {
    Query,
    Set { day: i64, month: i64 },
}

/// What a /customdate invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomDateRequest {
    List,
    Query { name: String },
    Upsert { name: String, date: DateSpec },
}

/// Builds the reply text for every countdown command
pub struct CountdownService {
    birthday_repo: Arc<dyn BirthdayRepository>,
    custom_date_repo: Arc<dyn CustomDateRepository>,
    fuzzy_matcher: SkimMatcherV2,
}

impl CountdownService {
    pub fn new(
        birthday_repo: Arc<dyn BirthdayRepository>,
        custom_date_repo: Arc<dyn CustomDateRepository>,
    ) -> Self {
        Self {
            birthday_repo,
            custom_date_repo,
            fuzzy_matcher: SkimMatcherV2::default(),
        }
    }

    pub fn holiday(&self, holiday: Holiday) -> String {
        time_until(holiday.date(), Some(holiday.label()))
    }

    pub fn date(&self, date: DateSpec) -> String {
        time_until(date, None)
    }

    pub async fn birthday(&self, user_id: u64, request: BirthdayRequest) -> Result<String> {
        match request {
            BirthdayRequest::Set { day, month } => {
                let birthday = match self.birthday_repo.get(user_id).await? {
                    Some(mut existing) => {
                        existing.update_date(day, month);
                        existing
                    }
                    None => Birthday::new(user_id, day, month),
                };

                self.birthday_repo.save(&birthday).await?;
                info!("Birthday of user {} set to {:02}.{:02}", user_id, day, month);

                Ok(messages::birthday_saved(day, month))
            }
            BirthdayRequest::Query => match self.birthday_repo.get(user_id).await? {
                Some(birthday) => Ok(time_until(
                    DateSpec::annual(birthday.day, birthday.month),
                    Some(messages::BIRTHDAY_LABEL),
                )),
                None => Ok(messages::BIRTHDAY_NOT_SET.to_string()),
            },
        }
    }

    pub async fn custom_date(&self, user_id: u64, request: CustomDateRequest) -> Result<String> {
        match request {
            CustomDateRequest::List => {
                let names: Vec<String> = self
                    .custom_date_repo
                    .list(user_id)
                    .await?
                    .into_iter()
                    .map(|event| event.name)
                    .collect();

                if names.is_empty() {
                    return Ok(messages::NO_CUSTOM_DATES.to_string());
                }

                Ok(messages::custom_date_list(&names))
            }
            CustomDateRequest::Query { name } => {
                match self.custom_date_repo.get(user_id, &name).await? {
                    Some(event) => Ok(time_until(
                        event.date_spec(),
                        Some(format!("`{}`", event.name).as_str()),
                    )),
                    None => {
                        let similar = self.similar_names(user_id, &name).await?;
                        debug!(
                            "Custom date '{}' of user {} not found, {} similar",
                            name,
                            user_id,
                            similar.len()
                        );
                        Ok(messages::custom_date_not_found(&name, &similar))
                    }
                }
            }
            CustomDateRequest::Upsert { name, date } => {
                let event = CustomDate::new(user_id, name, date);
                self.custom_date_repo.upsert(&event).await?;
                info!("Custom date '{}' of user {} saved", event.name, user_id);

                Ok(time_until(date, Some(format!("`{}`", event.name).as_str())))
            }
        }
    }

    /// Stored event names resembling `query`, best match first
    async fn similar_names(&self, user_id: u64, query: &str) -> Result<Vec<String>> {
        let query = query.to_lowercase();

        let mut scored: Vec<(i64, String)> = self
            .custom_date_repo
            .list(user_id)
            .await?
            .into_iter()
            .filter_map(|event| {
                self.fuzzy_matcher
                    .fuzzy_match(&event.name.to_lowercase(), &query)
                    .map(|score| (score, event.name))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

        Ok(scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, name)| name)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::memory_countdown_repository::{
        MemoryBirthdayRepository, MemoryCustomDateRepository,
    };

    fn service() -> CountdownService {
        CountdownService::new(
            Arc::new(MemoryBirthdayRepository::new()),
            Arc::new(MemoryCustomDateRepository::new()),
        )
    }

    fn is_countdown(text: &str, label: &str) -> bool {
        text.starts_with(&format!("До {} осталось", label))
            || text.starts_with(&format!("{} наступило", label))
    }

    #[test]
    fn test_holiday_uses_its_label() {
        let service = service();
        assert!(is_countdown(&service.holiday(Holiday::NewYear), "Нового года"));
        assert!(is_countdown(&service.holiday(Holiday::Summer), "лета"));
    }

    #[test]
    fn test_date_without_label_shows_the_date() {
        let text = service().date(DateSpec::new(17, 5, Some(2030)));
        assert!(text.starts_with("До `17.05.2030` осталось"));
    }

    #[tokio::test]
    async fn test_birthday_query_before_set() {
        let text = service().birthday(7, BirthdayRequest::Query).await.unwrap();
        assert_eq!(text, messages::BIRTHDAY_NOT_SET);
    }

    #[tokio::test]
    async fn test_birthday_set_then_query() {
        let service = service();

        let text = service
            .birthday(7, BirthdayRequest::Set { day: 5, month: 3 })
            .await
            .unwrap();
        assert_eq!(text, "День рождения установлен на `05.03`");

        let text = service.birthday(7, BirthdayRequest::Query).await.unwrap();
        assert!(is_countdown(&text, messages::BIRTHDAY_LABEL));

        // another user still has nothing stored
        let text = service.birthday(8, BirthdayRequest::Query).await.unwrap();
        assert_eq!(text, messages::BIRTHDAY_NOT_SET);
    }

    #[tokio::test]
    async fn test_birthday_overwrite_keeps_single_record() {
        let birthdays = Arc::new(MemoryBirthdayRepository::new());
        let service = CountdownService::new(
            birthdays.clone(),
            Arc::new(MemoryCustomDateRepository::new()),
        );

        service
            .birthday(7, BirthdayRequest::Set { day: 5, month: 3 })
            .await
            .unwrap();
        service
            .birthday(7, BirthdayRequest::Set { day: 20, month: 11 })
            .await
            .unwrap();

        let stored = birthdays.get(7).await.unwrap().unwrap();
        assert_eq!((stored.day, stored.month), (20, 11));
    }

    #[tokio::test]
    async fn test_invalid_birthday_is_rejected_by_storage() {
        let result = service()
            .birthday(7, BirthdayRequest::Set { day: 40, month: 3 })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_custom_date_list_empty() {
        let text = service()
            .custom_date(1, CustomDateRequest::List)
            .await
            .unwrap();
        assert_eq!(text, messages::NO_CUSTOM_DATES);
    }

    #[tokio::test]
    async fn test_custom_date_upsert_query_and_list() {
        let service = service();

        let text = service
            .custom_date(
                1,
                CustomDateRequest::Upsert {
                    name: "отпуск".to_string(),
                    date: DateSpec::new(14, 6, Some(2100)),
                },
            )
            .await
            .unwrap();
        assert!(text.starts_with("До `отпуск` осталось"));

        service
            .custom_date(
                1,
                CustomDateRequest::Upsert {
                    name: "exam".to_string(),
                    date: DateSpec::annual(20, 1),
                },
            )
            .await
            .unwrap();

        let text = service
            .custom_date(
                1,
                CustomDateRequest::Query {
                    name: "отпуск".to_string(),
                },
            )
            .await
            .unwrap();
        assert!(text.starts_with("До `отпуск` осталось"));

        let text = service
            .custom_date(1, CustomDateRequest::List)
            .await
            .unwrap();
        assert_eq!(text, "**Твои даты:**\n\nexam\nотпуск");
    }

    #[tokio::test]
    async fn test_custom_date_upsert_replaces_date() {
        let service = service();
        for year in [1990, 2100] {
            service
                .custom_date(
                    1,
                    CustomDateRequest::Upsert {
                        name: "launch".to_string(),
                        date: DateSpec::new(1, 1, Some(year)),
                    },
                )
                .await
                .unwrap();
        }

        let text = service
            .custom_date(
                1,
                CustomDateRequest::Query {
                    name: "launch".to_string(),
                },
            )
            .await
            .unwrap();
        assert!(text.starts_with("До `launch` осталось"));
        assert!(!text.contains("назад"));
    }

    #[tokio::test]
    async fn test_custom_dates_are_per_user() {
        let service = service();
        service
            .custom_date(
                1,
                CustomDateRequest::Upsert {
                    name: "exam".to_string(),
                    date: DateSpec::annual(20, 1),
                },
            )
            .await
            .unwrap();

        let text = service
            .custom_date(
                2,
                CustomDateRequest::Query {
                    name: "exam".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(
            text,
            "Событие `exam` не найдено\nСоздай его командой `/customdate exam 31 12`"
        );
    }

    #[tokio::test]
    async fn test_unknown_custom_date_suggests_similar_names() {
        let service = service();
        for name in ["exam", "birthday party", "examination"] {
            service
                .custom_date(
                    1,
                    CustomDateRequest::Upsert {
                        name: name.to_string(),
                        date: DateSpec::annual(20, 1),
                    },
                )
                .await
                .unwrap();
        }

        let text = service
            .custom_date(
                1,
                CustomDateRequest::Query {
                    name: "exm".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(text.starts_with("Событие `exm` не найдено"));
        assert!(text.contains("Похожие события:"));
        assert!(text.contains("`exam`"));
        assert!(!text.contains("birthday party"));
    }
}
