//! Review drafts for delivered orders.
//!
//! A [`ReviewDraft`] collects a star rating, written text and optional photo
//! or video attachments for every line of one order. [`ReviewDraft::submit`]
//! checks that each line is rated and described before producing a
//! [`SubmittedReview`].

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use supply_stall_core::{ItemId, OrderNumber, RatingError, StarRating};

use crate::orders::BuyerOrder;

/// Errors raised while editing or submitting a review.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// The order has not been delivered yet.
    #[error("order {0} cannot be reviewed yet")]
    NotReviewable(OrderNumber),
    /// The order has no lines.
    #[error("order has nothing to review")]
    NothingToReview,
    /// The item is not part of the order under review.
    #[error("item {0} is not part of this order")]
    UnknownItem(ItemId),
    /// Star rating out of range.
    #[error(transparent)]
    Rating(#[from] RatingError),
    /// Only image and video files can be attached.
    #[error("unsupported attachment type: {0}")]
    UnsupportedMedia(String),
    /// An item was left without stars.
    #[error("please rate {0}")]
    MissingRating(String),
    /// An item was left without written feedback.
    #[error("please write a review for {0}")]
    MissingText(String),
}

/// Kind of file attached to a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a MIME type such as `image/png`.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.starts_with("image/") {
            Some(Self::Image)
        } else if mime.starts_with("video/") {
            Some(Self::Video)
        } else {
            None
        }
    }
}

/// A photo or video attached to a line review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub id: u32,
    pub name: String,
    pub kind: MediaKind,
}

/// Review in progress for one order line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineReviewDraft {
    pub name: String,
    pub rating: Option<StarRating>,
    pub text: String,
    pub attachments: Vec<Attachment>,
    /// "Would you order this again?"
    pub would_reorder: Option<bool>,
    /// "Did the product match its description?"
    pub as_described: Option<bool>,
}

/// A finished review for one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReview {
    pub item_id: ItemId,
    pub rating: StarRating,
    pub text: String,
    pub attachments: Vec<Attachment>,
    pub would_reorder: Option<bool>,
    pub as_described: Option<bool>,
}

/// A review that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedReview {
    pub order: OrderNumber,
    pub lines: Vec<LineReview>,
    /// Stars for the supplier as a whole.
    pub overall_rating: Option<StarRating>,
    pub overall_comment: Option<String>,
}

/// Review being written for a delivered order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewDraft {
    order: OrderNumber,
    lines: IndexMap<ItemId, LineReviewDraft>,
    overall_rating: Option<StarRating>,
    overall_comment: String,
    next_attachment_id: u32,
}

impl ReviewDraft {
    /// Start a review for `order`.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is not delivered or has no lines.
    pub fn for_order(order: &BuyerOrder) -> Result<Self, ReviewError> {
        if !order.can_review() {
            return Err(ReviewError::NotReviewable(order.number.clone()));
        }
        if order.lines.is_empty() {
            return Err(ReviewError::NothingToReview);
        }

        let lines = order
            .lines
            .iter()
            .map(|line| {
                (
                    line.item_id,
                    LineReviewDraft {
                        name: line.name.clone(),
                        ..LineReviewDraft::default()
                    },
                )
            })
            .collect();

        Ok(Self {
            order: order.number.clone(),
            lines,
            overall_rating: None,
            overall_comment: String::new(),
            next_attachment_id: 1,
        })
    }

    fn line_mut(&mut self, item_id: ItemId) -> Result<&mut LineReviewDraft, ReviewError> {
        self.lines
            .get_mut(&item_id)
            .ok_or(ReviewError::UnknownItem(item_id))
    }

    /// Set the star rating for one line.
    ///
    /// # Errors
    ///
    /// Returns an error for items outside the order or stars outside 1–5.
    pub fn set_rating(&mut self, item_id: ItemId, stars: u8) -> Result<(), ReviewError> {
        let rating = StarRating::new(stars)?;
        self.line_mut(item_id)?.rating = Some(rating);
        Ok(())
    }

    /// Replace the written review for one line.
    ///
    /// # Errors
    ///
    /// Returns an error for items outside the order.
    pub fn set_text(&mut self, item_id: ItemId, text: &str) -> Result<(), ReviewError> {
        self.line_mut(item_id)?.text = text.to_string();
        Ok(())
    }

    /// Answer the two yes/no questions for one line.
    ///
    /// # Errors
    ///
    /// Returns an error for items outside the order.
    pub fn set_answers(
        &mut self,
        item_id: ItemId,
        would_reorder: Option<bool>,
        as_described: Option<bool>,
    ) -> Result<(), ReviewError> {
        let line = self.line_mut(item_id)?;
        line.would_reorder = would_reorder;
        line.as_described = as_described;
        Ok(())
    }

    /// Attach a photo or video to one line, returning the attachment id.
    ///
    /// # Errors
    ///
    /// Returns an error for items outside the order or non-media files.
    pub fn attach(
        &mut self,
        item_id: ItemId,
        name: &str,
        mime: &str,
    ) -> Result<u32, ReviewError> {
        let kind = MediaKind::from_mime(mime)
            .ok_or_else(|| ReviewError::UnsupportedMedia(mime.to_string()))?;
        let id = self.next_attachment_id;
        self.line_mut(item_id)?.attachments.push(Attachment {
            id,
            name: name.to_string(),
            kind,
        });
        self.next_attachment_id += 1;
        Ok(id)
    }

    /// Remove an attachment. Returns `false` if it was not there.
    pub fn detach(&mut self, item_id: ItemId, attachment_id: u32) -> bool {
        let Some(line) = self.lines.get_mut(&item_id) else {
            return false;
        };
        let before = line.attachments.len();
        line.attachments.retain(|attachment| attachment.id != attachment_id);
        line.attachments.len() != before
    }

    /// Rate the supplier as a whole. Optional at submit.
    ///
    /// # Errors
    ///
    /// Returns an error for stars outside 1–5.
    pub fn set_overall_rating(&mut self, stars: u8) -> Result<(), ReviewError> {
        self.overall_rating = Some(StarRating::new(stars)?);
        Ok(())
    }

    pub fn set_overall_comment(&mut self, comment: &str) {
        self.overall_comment = comment.to_string();
    }

    #[must_use]
    pub const fn order(&self) -> &OrderNumber {
        &self.order
    }

    #[must_use]
    pub fn line(&self, item_id: ItemId) -> Option<&LineReviewDraft> {
        self.lines.get(&item_id)
    }

    /// Validate and finish the review.
    ///
    /// # Errors
    ///
    /// Returns the first line, in order, that is missing stars or text.
    pub fn submit(self) -> Result<SubmittedReview, ReviewError> {
        let mut lines = Vec::with_capacity(self.lines.len());

        for (item_id, draft) in self.lines {
            let rating = draft
                .rating
                .ok_or_else(|| ReviewError::MissingRating(draft.name.clone()))?;
            if draft.text.trim().is_empty() {
                return Err(ReviewError::MissingText(draft.name));
            }
            lines.push(LineReview {
                item_id,
                rating,
                text: draft.text.trim().to_string(),
                attachments: draft.attachments,
                would_reorder: draft.would_reorder,
                as_described: draft.as_described,
            });
        }

        let comment = self.overall_comment.trim();
        Ok(SubmittedReview {
            order: self.order,
            lines,
            overall_rating: self.overall_rating,
            overall_comment: (!comment.is_empty()).then(|| comment.to_string()),
        })
    }
}
