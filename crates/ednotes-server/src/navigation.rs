//! Navigation tree assembly.
//!
//! Turns the flat category and article listings into the nested, filtered
//! forest that clients render as the site navigation. Unpublished categories
//! are pruned together with their whole subtree, articles hang off the
//! category they reference, and sibling order is whatever order the store
//! returned.

use std::collections::{HashMap, HashSet};

use ednotes_shared::{Article, ArticleSummary, Category, CategoryTreeNode};

use crate::store::{Store, StoreResult};

/// Deepest level emitted, counting the root as 1. Descendants below it are
/// cut off so that serializing and dropping a node stays shallow.
pub const MAX_TREE_DEPTH: usize = 256;

/// Adjacency lists over one snapshot of categories and articles.
pub struct NavigationIndex<'a> {
    categories: &'a [Category],
    children_by_parent: HashMap<i32, Vec<&'a Category>>,
    articles_by_category: HashMap<i32, Vec<ArticleSummary>>,
}

/// A node under construction and the position of its next unvisited child.
struct Frame {
    node: CategoryTreeNode,
    next_child: usize,
}

impl<'a> NavigationIndex<'a> {
    pub fn new(categories: &'a [Category], articles: &[Article]) -> Self {
        let mut children_by_parent: HashMap<i32, Vec<&Category>> = HashMap::new();
        for category in categories {
            if let Some(parent_id) = category.parent_id {
                children_by_parent.entry(parent_id).or_default().push(category);
            }
        }

        // Uncategorized articles have no node to hang off and are left out.
        let mut articles_by_category: HashMap<i32, Vec<ArticleSummary>> = HashMap::new();
        for article in articles {
            if let Some(category_id) = article.category_id {
                articles_by_category
                    .entry(category_id)
                    .or_default()
                    .push(ArticleSummary::from(article));
            }
        }

        Self {
            categories,
            children_by_parent,
            articles_by_category,
        }
    }

    /// Every visible root category with its visible descendants.
    pub fn forest(&self) -> Vec<CategoryTreeNode> {
        let mut visited = HashSet::new();
        self.categories
            .iter()
            .filter(|c| c.is_root())
            .filter_map(|c| self.build_node(c, &mut visited))
            .collect()
    }

    /// The subtree rooted at `category_id`, as a zero- or one-element list.
    ///
    /// A missing category and an unpublished one both produce an empty list.
    pub fn subtree(&self, category_id: i32) -> Vec<CategoryTreeNode> {
        let mut visited = HashSet::new();
        self.categories
            .iter()
            .find(|c| c.id == category_id)
            .and_then(|c| self.build_node(c, &mut visited))
            .into_iter()
            .collect()
    }

    fn children_of(&self, category_id: i32) -> &[&'a Category] {
        self.children_by_parent
            .get(&category_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `category` gets a node: it must be published and not already
    /// built in this pass.
    fn enter(&self, category: &Category, visited: &mut HashSet<i32>) -> bool {
        if !category.published {
            return false;
        }

        if !visited.insert(category.id) {
            tracing::warn!(
                category_id = category.id,
                "Category reached twice while building navigation, parent chain is cyclic"
            );
            return false;
        }

        true
    }

    fn open(&self, category: &Category) -> Frame {
        let mut node = CategoryTreeNode::new(category.id, category.title.clone());
        if let Some(articles) = self.articles_by_category.get(&category.id) {
            node.articles = articles.clone();
        }
        Frame {
            node,
            next_child: 0,
        }
    }

    /// Depth-first build with an explicit stack. A node is attached to its
    /// parent once all of its own children are done, so sibling order is
    /// the index order.
    fn build_node(
        &self,
        root: &Category,
        visited: &mut HashSet<i32>,
    ) -> Option<CategoryTreeNode> {
        if !self.enter(root, visited) {
            return None;
        }

        let mut stack = vec![self.open(root)];

        loop {
            let depth = stack.len();
            let frame = stack.last_mut()?;
            let children = self.children_of(frame.node.id);

            if let Some(&child) = children.get(frame.next_child) {
                if depth >= MAX_TREE_DEPTH {
                    tracing::warn!(
                        category_id = frame.node.id,
                        depth,
                        "Navigation tree too deep, dropping descendants"
                    );
                    frame.next_child = children.len();
                    continue;
                }

                frame.next_child += 1;
                if self.enter(child, visited) {
                    stack.push(self.open(child));
                }
                continue;
            }

            let done = stack.pop()?.node;
            match stack.last_mut() {
                Some(parent) => parent.node.children.push(done),
                None => return Some(done),
            }
        }
    }
}

/// Reads one snapshot from the store and assembles the navigation tree,
/// optionally scoped to one category.
pub async fn load_tree(
    store: &dyn Store,
    category_id: Option<i32>,
) -> StoreResult<Vec<CategoryTreeNode>> {
    let categories = store.list_categories().await?;
    let articles = store.list_articles().await?;

    let index = NavigationIndex::new(&categories, &articles);
    let tree = match category_id {
        Some(id) => index.subtree(id),
        None => index.forest(),
    };

    tracing::debug!(
        categories = categories.len(),
        articles = articles.len(),
        roots = tree.len(),
        "Built navigation tree"
    );

    Ok(tree)
}

/// Summaries of one category's articles, without building any tree.
pub async fn load_article_summaries(
    store: &dyn Store,
    category_id: i32,
) -> StoreResult<Vec<ArticleSummary>> {
    let articles = store.list_articles_by_category(category_id).await?;
    Ok(articles.iter().map(ArticleSummary::from).collect())
}
