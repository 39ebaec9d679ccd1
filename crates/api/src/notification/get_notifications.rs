use crate::{
    error::KeeperError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use record_keeper_api_structs::{
    dtos::NotificationDTO,
    get_notifications::{APIResponse, QueryParams},
};
use record_keeper_infra::{KeeperContext, Notification, NotificationPermission};

const DEFAULT_LIMIT: usize = 20;

fn notification_dto(notification: Notification) -> NotificationDTO {
    NotificationDTO {
        id: notification.id,
        title: notification.title,
        body: notification.body,
        tag: notification.tag,
        url: notification.url,
        require_interaction: notification.require_interaction,
        created_at: notification.created_at,
        auto_close_at: notification.auto_close_at,
    }
}

pub async fn get_notifications_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    let usecase = GetNotificationsUseCase {
        limit: query_params.limit.unwrap_or(DEFAULT_LIMIT),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                permission: res.permission.to_string(),
                notifications: res.notifications.into_iter().map(notification_dto).collect(),
            })
        })
        .map_err(|_| KeeperError::InternalError)
}

/// The most recent notifications shown, newest first
#[derive(Debug)]
pub struct GetNotificationsUseCase {
    pub limit: usize,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub permission: NotificationPermission,
    pub notifications: Vec<Notification>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetNotificationsUseCase {
    type Response = UseCaseResponse;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetNotifications";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        Ok(UseCaseResponse {
            permission: ctx.notifications.permission(),
            notifications: ctx.notifications.recent(self.limit),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::{now, setup_context};

    #[actix_web::test]
    async fn lists_newest_first() {
        let (ctx, _) = setup_context();
        for title in ["First", "Second", "Third"] {
            ctx.notifications.push(Notification::new(
                title.into(),
                "Body".into(),
                "tag".into(),
                now(),
            ));
        }

        let res = execute(GetNotificationsUseCase { limit: 2 }, &ctx)
            .await
            .unwrap();
        assert_eq!(res.permission, NotificationPermission::Granted);
        let titles = res
            .notifications
            .iter()
            .map(|n| n.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Third", "Second"]);

        let dto = notification_dto(res.notifications[0].clone());
        assert_eq!(dto.auto_close_at - dto.created_at, chrono::Duration::seconds(30));
    }
}
