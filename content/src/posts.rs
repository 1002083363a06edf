//! Built-in blog posts.

use time::macros::date;

use crate::model::{BlogPost, PostSummary};

const LISTING_IMAGE: &str = "/placeholder.svg?height=200&width=300";
const POST_IMAGE: &str = "/placeholder.svg?height=400&width=800";

pub(crate) static POST_SUMMARIES: &[PostSummary] = &[
    PostSummary {
        slug: "building-scalable-react-applications",
        title: "Building Scalable React Applications",
        description: "Learn the best practices for building large-scale React applications that are maintainable and performant. We'll cover component architecture, state management, and optimization techniques.",
        image: LISTING_IMAGE,
        date: date!(2024 - 01 - 15),
        read_time: "8 min read",
        category: "React",
    },
    PostSummary {
        slug: "future-of-web-development",
        title: "The Future of Web Development",
        description: "Exploring upcoming trends and technologies that will shape the future of web development. From AI integration to new frameworks and tools.",
        image: LISTING_IMAGE,
        date: date!(2024 - 01 - 10),
        read_time: "6 min read",
        category: "Technology",
    },
    PostSummary {
        slug: "mastering-typescript",
        title: "Mastering TypeScript",
        description: "A comprehensive guide to TypeScript features and how to leverage them in your projects. Advanced types, generics, and best practices.",
        image: LISTING_IMAGE,
        date: date!(2024 - 01 - 05),
        read_time: "12 min read",
        category: "TypeScript",
    },
    PostSummary {
        slug: "modern-css-techniques",
        title: "Modern CSS Techniques",
        description: "Discover the latest CSS features and techniques that will improve your styling workflow and create better user experiences.",
        image: LISTING_IMAGE,
        date: date!(2023 - 12 - 28),
        read_time: "7 min read",
        category: "CSS",
    },
    PostSummary {
        slug: "api-design-best-practices",
        title: "API Design Best Practices",
        description: "Learn how to design robust, scalable APIs that are easy to use and maintain. RESTful principles and GraphQL considerations.",
        image: LISTING_IMAGE,
        date: date!(2023 - 12 - 20),
        read_time: "10 min read",
        category: "Backend",
    },
    PostSummary {
        slug: "performance-optimization-tips",
        title: "Performance Optimization Tips",
        description: "Essential techniques for optimizing web application performance. From bundle splitting to image optimization and caching strategies.",
        image: LISTING_IMAGE,
        date: date!(2023 - 12 - 15),
        read_time: "9 min read",
        category: "Performance",
    },
];

pub(crate) static POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "building-scalable-react-applications",
        title: "Building Scalable React Applications",
        description: "Learn the best practices for building large-scale React applications that are maintainable and performant.",
        content: SCALABLE_REACT,
        image: POST_IMAGE,
        date: date!(2024 - 01 - 15),
        read_time: "8 min read",
        category: "React",
        tags: &["React", "JavaScript", "Architecture", "Performance"],
    },
    BlogPost {
        slug: "future-of-web-development",
        title: "The Future of Web Development",
        description: "Exploring upcoming trends and technologies that will shape the future of web development.",
        content: FUTURE_OF_WEB,
        image: POST_IMAGE,
        date: date!(2024 - 01 - 10),
        read_time: "6 min read",
        category: "Technology",
        tags: &["Web Development", "AI", "WebAssembly", "Future"],
    },
];

const SCALABLE_REACT: &str = r##"
# Building Scalable React Applications

Building scalable React applications is crucial for long-term success in modern web development. As applications grow in complexity and team size, having the right architecture and patterns becomes essential.

## Component Architecture

The foundation of any scalable React application is a well-thought-out component architecture. Here are the key principles I follow:

### 1. Component Composition

Instead of building monolithic components, break them down into smaller, reusable pieces. This makes your code more maintainable and testable.

```jsx
// Instead of this monolithic component
function UserProfile({ user }) {
  return (
    <div className="user-profile">
      <div className="avatar">
        <img src={user.avatar || "/placeholder.svg"} alt={user.name} />
      </div>
      <div className="info">
        <h2>{user.name}</h2>
        <p>{user.email}</p>
        <div className="stats">
          <span>Posts: {user.postCount}</span>
          <span>Followers: {user.followerCount}</span>
        </div>
      </div>
    </div>
  )
}

// Break it down into smaller components
function Avatar({ src, alt }) {
  return (
    <div className="avatar">
      <img src={src || "/placeholder.svg"} alt={alt} />
    </div>
  )
}

function UserInfo({ name, email }) {
  return (
    <div className="info">
      <h2>{name}</h2>
      <p>{email}</p>
    </div>
  )
}

function UserStats({ postCount, followerCount }) {
  return (
    <div className="stats">
      <span>Posts: {postCount}</span>
      <span>Followers: {followerCount}</span>
    </div>
  )
}

function UserProfile({ user }) {
  return (
    <div className="user-profile">
      <Avatar src={user.avatar} alt={user.name} />
      <UserInfo name={user.name} email={user.email} />
      <UserStats postCount={user.postCount} followerCount={user.followerCount} />
    </div>
  )
}
```

### 2. Custom Hooks

Extract complex logic into custom hooks to promote reusability and separation of concerns.

```jsx
// Custom hook for API calls
function useApi(url) {
  const [data, setData] = useState(null)
  const [loading, setLoading] = useState(true)
  const [error, setError] = useState(null)

  useEffect(() => {
    fetch(url)
      .then(response => response.json())
      .then(setData)
      .catch(setError)
      .finally(() => setLoading(false))
  }, [url])

  return { data, loading, error }
}

// Usage in component
function UserList() {
  const { data: users, loading, error } = useApi('/api/users')

  if (loading) return <div>Loading...</div>
  if (error) return <div>Error: {error.message}</div>

  return (
    <div>
      {users.map(user => (
        <UserProfile key={user.id} user={user} />
      ))}
    </div>
  )
}
```

## State Management

For large applications, proper state management is crucial. Here's my approach:

### 1. Local State First

Start with local state and only lift state up when necessary. Not everything needs to be in global state.

### 2. Context for Shared State

Use React Context for state that needs to be shared across multiple components but doesn't require complex updates.

### 3. External Libraries for Complex State

For complex state management needs, consider libraries like Redux Toolkit or Zustand.

## Performance Optimization

Performance is key for scalable applications:

### 1. Code Splitting

Use dynamic imports to split your code and load only what's needed:

```jsx
const LazyComponent = lazy(() => import('./LazyComponent'))

function App() {
  return (
    <Suspense fallback={<div>Loading...</div>}>
      <LazyComponent />
    </Suspense>
  )
}
```

### 2. Memoization

Use React.memo, useMemo, and useCallback to prevent unnecessary re-renders:

```jsx
const ExpensiveComponent = memo(function ExpensiveComponent({ data }) {
  const processedData = useMemo(() => {
    return data.map(item => expensiveProcessing(item))
  }, [data])

  return <div>{/* render processed data */}</div>
})
```

## Testing Strategy

A scalable application needs a comprehensive testing strategy:

1. **Unit Tests**: Test individual components and functions
2. **Integration Tests**: Test how components work together
3. **E2E Tests**: Test complete user workflows

## Conclusion

Building scalable React applications requires careful planning and adherence to best practices. Focus on component composition, proper state management, performance optimization, and comprehensive testing to ensure your application can grow with your needs.

Remember, scalability isn't just about handling more users. It's also about maintaining code quality as your team and codebase grow.
"##;

const FUTURE_OF_WEB: &str = r##"
# The Future of Web Development

Web development is constantly evolving, and staying ahead of the curve is essential for developers who want to remain relevant and build cutting-edge applications. Let's explore the trends and technologies that are shaping the future of web development.

## AI Integration

Artificial Intelligence is becoming increasingly integrated into web development workflows and applications.

### AI-Powered Development Tools

- **Code Generation**: Tools like GitHub Copilot and ChatGPT are helping developers write code faster
- **Automated Testing**: AI can generate test cases and identify potential bugs
- **Design to Code**: Converting designs to code automatically

### AI in User Experiences

- **Personalization**: Dynamic content based on user behavior
- **Chatbots and Virtual Assistants**: More sophisticated conversational interfaces
- **Predictive UX**: Anticipating user needs and actions

## WebAssembly (WASM)

WebAssembly is enabling near-native performance in web browsers, opening up new possibilities:

- **High-Performance Applications**: Games, video editing, and scientific computing in the browser
- **Language Diversity**: Write web applications in languages like Rust, C++, and Go
- **Legacy Code Migration**: Bring existing applications to the web

## Edge Computing

Moving computation closer to users for better performance:

- **Edge Functions**: Run code at the edge for faster response times
- **CDN Evolution**: Content delivery networks becoming compute platforms
- **Reduced Latency**: Better user experiences globally

## Progressive Web Apps (PWAs) Evolution

PWAs continue to bridge the gap between web and native applications:

- **Advanced Capabilities**: Access to device features like camera, GPS, and sensors
- **Offline-First**: Better offline experiences and data synchronization
- **App Store Distribution**: PWAs in app stores alongside native apps

## Serverless and JAMstack

The trend toward serverless architectures continues:

- **Function-as-a-Service**: Event-driven, scalable backend functions
- **Static Site Generation**: Pre-built sites for better performance and security
- **Headless CMS**: Decoupled content management systems

## Web3 and Blockchain

Decentralized web technologies are gaining traction:

- **Decentralized Applications (dApps)**: Applications running on blockchain networks
- **NFTs and Digital Assets**: Integration of blockchain-based assets
- **Decentralized Identity**: User-controlled identity and data

## Micro-Frontends

Breaking down frontend monoliths:

- **Independent Deployment**: Teams can deploy features independently
- **Technology Diversity**: Different parts of an application can use different frameworks
- **Scalable Teams**: Better organization for large development teams

## Conclusion

The future of web development is exciting and full of possibilities. While it's impossible to predict exactly what will happen, these trends give us a good indication of where the industry is heading.

As developers, it's important to stay curious, keep learning, and experiment with new technologies while maintaining a solid foundation in web fundamentals.
"##;
