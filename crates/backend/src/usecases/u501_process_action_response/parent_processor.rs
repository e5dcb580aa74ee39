use anyhow::Context;
use contracts::domain::a004_listing_product::aggregate::{ListingProduct, VariationRole};
use contracts::enums::listing_status::ListingStatus;
use contracts::enums::status_changer::StatusChanger;
use uuid::Uuid;

use crate::domain::a004_listing_product::{repository, service};

/// Каскад после успешного действия над товаром из вариативной связки:
/// определить родителя и пересчитать его агрегатное состояние.
///
/// Родитель ищется по явной ссылке через репозиторий, а не по живому
/// графу объектов: так каскад не зависит от устаревших ссылок.
pub async fn process_parent(product: &ListingProduct) -> anyhow::Result<()> {
    if !product.variation_role.is_relation_mode() {
        return Ok(());
    }

    let parent_id = if product.variation_role == VariationRole::RelationParent {
        product.base.id.value()
    } else {
        let parent_ref = product.parent_product_ref.as_deref().with_context(|| {
            format!(
                "Child product {} declares a relation but has no parent reference",
                product.to_string_id()
            )
        })?;
        Uuid::parse_str(parent_ref)
            .with_context(|| format!("Invalid parent product reference: {}", parent_ref))?
    };

    let mut parent = repository::get_by_id(parent_id)
        .await?
        .with_context(|| format!("Parent listing product {} not found", parent_id))?;

    process(&mut parent).await
}

/// Пересчитать состояние родителя по его потомкам и сохранить
pub async fn process(parent: &mut ListingProduct) -> anyhow::Result<()> {
    let children = repository::list_by_parent_ref(&parent.to_string_id()).await?;

    let status = derive_parent_status(&children);
    let qty = derive_parent_qty(&children);

    parent.set_status(status, StatusChanger::Synch);
    parent.online_qty = qty;
    service::save(parent).await?;

    tracing::debug!(
        "Parent {} re-derived from {} children: status={}, qty={:?}",
        parent.base.code,
        children.len(),
        status.label(),
        qty
    );

    Ok(())
}

/// Агрегатный статус родителя: достаточно одного активного потомка,
/// чтобы связка считалась активной
fn derive_parent_status(children: &[ListingProduct]) -> ListingStatus {
    if children
        .iter()
        .any(|c| c.status == ListingStatus::Listed)
    {
        ListingStatus::Listed
    } else if children
        .iter()
        .any(|c| c.status == ListingStatus::Blocked)
    {
        ListingStatus::Blocked
    } else if children
        .iter()
        .any(|c| c.status == ListingStatus::Stopped)
    {
        ListingStatus::Stopped
    } else {
        ListingStatus::NotListed
    }
}

/// Остаток родителя — сумма известных остатков потомков
fn derive_parent_qty(children: &[ListingProduct]) -> Option<i32> {
    let known: Vec<i32> = children.iter().filter_map(|c| c.online_qty).collect();
    if known.is_empty() {
        None
    } else {
        Some(known.iter().sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_listing_product::aggregate::VariationRole;

    fn child(status: ListingStatus, qty: Option<i32>) -> ListingProduct {
        let mut p = ListingProduct::new_for_insert(
            "LP-C".into(),
            "Child".into(),
            "l".into(),
            "a".into(),
            "m".into(),
            1,
            VariationRole::RelationChild,
            Some("parent".into()),
        );
        p.status = status;
        p.online_qty = qty;
        p
    }

    #[test]
    fn test_derive_parent_status() {
        assert_eq!(derive_parent_status(&[]), ListingStatus::NotListed);
        assert_eq!(
            derive_parent_status(&[
                child(ListingStatus::Stopped, None),
                child(ListingStatus::Listed, None)
            ]),
            ListingStatus::Listed
        );
        assert_eq!(
            derive_parent_status(&[
                child(ListingStatus::Stopped, None),
                child(ListingStatus::NotListed, None)
            ]),
            ListingStatus::Stopped
        );
        assert_eq!(
            derive_parent_status(&[
                child(ListingStatus::Blocked, None),
                child(ListingStatus::Stopped, None)
            ]),
            ListingStatus::Blocked
        );
        assert_eq!(
            derive_parent_status(&[child(ListingStatus::NotListed, None)]),
            ListingStatus::NotListed
        );
    }

    #[test]
    fn test_derive_parent_qty() {
        assert_eq!(derive_parent_qty(&[]), None);
        assert_eq!(
            derive_parent_qty(&[
                child(ListingStatus::Listed, Some(3)),
                child(ListingStatus::Listed, None),
                child(ListingStatus::Stopped, Some(4))
            ]),
            Some(7)
        );
    }
}
