//! Template file contents

/// `services/service.delete.ts.tpl`
pub const SERVICE_DELETE: &str = r#"import prisma from "../../database";
import AppError from "../../error/AppError";

export const Delete{{Model}}Service = async (id: number): Promise<void> => {
  const {{model}} = await prisma.{{model}}.findUnique({ where: { id } });

  if (!{{model}}) {
    throw new AppError("ERR_NO_{{MODEL}}_FOUND", 404);
  }

  await prisma.{{model}}.delete({ where: { id } });
};

export default Delete{{Model}}Service;
"#;

/// `services/service.list.ts.tpl`
pub const SERVICE_LIST: &str = r#"import prisma from "../../database";

export interface {{Model}}Record {
{{fields}}}

interface Request {
  searchParam?: string;
  pageNumber?: string | number;
}

interface Response {
  {{modelPlural}}: {{Model}}Record[];
  count: number;
  hasMore: boolean;
}

const PAGE_SIZE = 20;

export const List{{Model}}Service = async ({
  pageNumber = "1",
}: Request): Promise<Response> => {
  const page = Number(pageNumber) || 1;
  const offset = PAGE_SIZE * (page - 1);

  const [{{modelPlural}}, count] = await prisma.$transaction([
    prisma.{{model}}.findMany({
      skip: offset,
      take: PAGE_SIZE,
      orderBy: { id: "desc" },
    }),
    prisma.{{model}}.count(),
  ]);

  const hasMore = count > offset + {{modelPlural}}.length;

  return { {{modelPlural}}, count, hasMore };
};

export default List{{Model}}Service;
"#;

/// `services/service.show.ts.tpl`
pub const SERVICE_SHOW: &str = r#"import prisma from "../../database";
import AppError from "../../error/AppError";

export interface {{Model}}Record {
{{fields}}}

export const Show{{Model}}Service = async (id: number): Promise<{{Model}}Record> => {
  const {{model}} = await prisma.{{model}}.findUnique({ where: { id } });

  if (!{{model}}) {
    throw new AppError("ERR_NO_{{MODEL}}_FOUND", 404);
  }

  return {{model}};
};

export default Show{{Model}}Service;
"#;

/// `services/service.store.ts.tpl`
pub const SERVICE_STORE: &str = r#"import prisma from "../../database";

export interface Store{{Model}}Data {
{{fields}}}

export const Store{{Model}}Service = async (data: Store{{Model}}Data) => {
  const {{model}} = await prisma.{{model}}.create({ data });

  return {{model}};
};

export default Store{{Model}}Service;
"#;

/// `services/service.update.ts.tpl`
pub const SERVICE_UPDATE: &str = r#"import prisma from "../../database";
import AppError from "../../error/AppError";

export interface Update{{Model}}Data {
{{fields}}}

interface Request {
  id: number;
  data: Partial<Update{{Model}}Data>;
}

export const Update{{Model}}Service = async ({ id, data }: Request) => {
  const exists = await prisma.{{model}}.findUnique({ where: { id } });

  if (!exists) {
    throw new AppError("ERR_NO_{{MODEL}}_FOUND", 404);
  }

  const {{model}} = await prisma.{{model}}.update({ where: { id }, data });

  return {{model}};
};

export default Update{{Model}}Service;
"#;

/// `controller.ts.tpl`
pub const CONTROLLER: &str = r#"import { Request, Response } from "express";

import List{{Model}}Service from "../services/{{ModuleServicesPath}}/List{{Model}}Service";
import Show{{Model}}Service from "../services/{{ModuleServicesPath}}/Show{{Model}}Service";
import Store{{Model}}Service from "../services/{{ModuleServicesPath}}/Store{{Model}}Service";
import Update{{Model}}Service from "../services/{{ModuleServicesPath}}/Update{{Model}}Service";
import Delete{{Model}}Service from "../services/{{ModuleServicesPath}}/Delete{{Model}}Service";

type IndexQuery = {
  searchParam?: string;
  pageNumber?: string;
};

export const index = async (req: Request, res: Response): Promise<Response> => {
  const { searchParam, pageNumber } = req.query as IndexQuery;

  const { {{modelPlural}}, count, hasMore } = await List{{Model}}Service({
    searchParam,
    pageNumber,
  });

  return res.json({ {{modelPlural}}, count, hasMore });
};

export const show = async (req: Request, res: Response): Promise<Response> => {
  const {{model}} = await Show{{Model}}Service(Number(req.params.{{model}}Id));

  return res.status(200).json({{model}});
};

export const store = async (req: Request, res: Response): Promise<Response> => {
  const {{model}} = await Store{{Model}}Service(req.body);

  return res.status(201).json({{model}});
};

export const update = async (req: Request, res: Response): Promise<Response> => {
  const {{model}} = await Update{{Model}}Service({
    id: Number(req.params.{{model}}Id),
    data: req.body,
  });

  return res.status(200).json({{model}});
};

export const remove = async (req: Request, res: Response): Promise<Response> => {
  await Delete{{Model}}Service(Number(req.params.{{model}}Id));

  return res.status(200).json({ message: "{{Model}} deleted" });
};
"#;

/// `route.ts.tpl`
pub const ROUTE: &str = r#"import { Router } from "express";

import isAuth from "../middleware/auth";
import * as {{Model}}Controller from "../controllers/{{Model}}Controller";

const {{model}}Routes = Router();

{{model}}Routes.get("/{{modelPlural}}", isAuth, {{Model}}Controller.index);
{{model}}Routes.get("/{{modelPlural}}/:{{model}}Id", isAuth, {{Model}}Controller.show);
{{model}}Routes.post("/{{modelPlural}}", isAuth, {{Model}}Controller.store);
{{model}}Routes.put("/{{modelPlural}}/:{{model}}Id", isAuth, {{Model}}Controller.update);
{{model}}Routes.delete("/{{modelPlural}}/:{{model}}Id", isAuth, {{Model}}Controller.remove);

export default {{model}}Routes;
"#;

/// `init/app.ts.tpl`
pub const INIT_APP: &str = r#"import "express-async-errors";
import cookieParser from "cookie-parser";
import cors from "cors";
import express, { NextFunction, Request, Response } from "express";

import AppError from "./error/AppError";
import logger from "./utils/logger";

const app = express();

app.use(cors({ credentials: true, origin: process.env.FRONTEND_URL }));
app.use(cookieParser());
app.use(express.json());

app.use(async (err: Error, req: Request, res: Response, _: NextFunction) => {
  if (err instanceof AppError) {
    logger.warn(err);
    return res.status(err.statusCode).json({ error: err.message });
  }

  logger.error(err);
  return res.status(500).json({ error: "Internal server error" });
});

export default app;
"#;

/// `init/server.ts.tpl`
pub const INIT_SERVER: &str = r#"import app from "./app";
import logger from "./utils/logger";

const port = process.env.PORT || 8080;

app.listen(port, () => {
  logger.info(`Server started on port: ${port}`);
});
"#;

/// `init/config/auth.ts.tpl`
pub const INIT_CONFIG_AUTH: &str = r#"export default {
  secret: process.env.JWT_SECRET || "mysecret",
  expiresIn: "15m",
  refreshSecret: process.env.JWT_REFRESH_SECRET || "myanothersecret",
  refreshExpiresIn: "7d",
};
"#;

/// `init/database/index.ts.tpl`
pub const INIT_DATABASE_INDEX: &str = r#"import { PrismaClient } from "@prisma/client";

const prisma = new PrismaClient();

export default prisma;
"#;

/// `init/database/schema.prisma.tpl`
pub const INIT_DATABASE_SCHEMA: &str = r#"generator client {
  provider = "prisma-client-js"
}

datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

model User {
  id           Int      @id @default(autoincrement())
  name         String
  email        String   @unique
  passwordHash String
  role         Role     @default(USER)
  tokenVersion Int      @default(0)
  createdAt    DateTime @default(now())
  updatedAt    DateTime @updatedAt
}

enum Role {
  ADMIN
  USER
}
"#;

/// `init/database/seed.ts.tpl`
pub const INIT_DATABASE_SEED: &str = r#"import { hash } from "bcryptjs";

import prisma from "./index";

async function main() {
  const passwordHash = await hash("admin", 8);

  await prisma.user.upsert({
    where: { email: "admin@admin.com" },
    update: {},
    create: {
      name: "Admin",
      email: "admin@admin.com",
      passwordHash,
      role: "ADMIN",
    },
  });
}

main()
  .catch(err => {
    console.error(err);
    process.exit(1);
  })
  .finally(async () => {
    await prisma.$disconnect();
  });
"#;

/// `init/error/AppError.ts.tpl`
pub const INIT_APP_ERROR: &str = r#"class AppError {
  public readonly message: string;

  public readonly statusCode: number;

  constructor(message: string, statusCode = 400) {
    this.message = message;
    this.statusCode = statusCode;
  }
}

export default AppError;
"#;

/// `init/middleware/auth.ts.tpl`
pub const INIT_MIDDLEWARE_AUTH: &str = r#"import { NextFunction, Request, Response } from "express";
import { verify } from "jsonwebtoken";

import authConfig from "../config/auth";
import AppError from "../error/AppError";

interface TokenPayload {
  id: string;
  role: string;
  iat: number;
  exp: number;
}

const isAuth = (req: Request, res: Response, next: NextFunction): void => {
  const authHeader = req.headers.authorization;

  if (!authHeader) {
    throw new AppError("ERR_SESSION_EXPIRED", 401);
  }

  const [, token] = authHeader.split(" ");

  try {
    const { id, role } = verify(token, authConfig.secret) as TokenPayload;
    req.user = { id, role };
  } catch (err) {
    throw new AppError("Invalid token", 403);
  }

  return next();
};

export default isAuth;
"#;

/// `init/@types/express.d.ts.tpl`
pub const INIT_EXPRESS_TYPES: &str = r#"declare namespace Express {
  export interface Request {
    user: { id: string; role: string };
  }
}
"#;

/// `init/utils/logger.ts.tpl`
pub const INIT_LOGGER: &str = r#"import pino from "pino";

const logger = pino({
  transport: {
    target: "pino-pretty",
    options: { colorize: true, translateTime: "SYS:standard" },
  },
});

export default logger;
"#;

/// `init/utils/refreshtoken.ts.tpl`
pub const INIT_REFRESH_TOKEN: &str = r#"import { Response } from "express";
import { sign } from "jsonwebtoken";

import authConfig from "../config/auth";

interface TokenUser {
  id: number;
  role: string;
  tokenVersion: number;
}

export const createAccessToken = (user: TokenUser): string =>
  sign({ id: user.id, role: user.role }, authConfig.secret, {
    expiresIn: authConfig.expiresIn,
  });

export const createRefreshToken = (user: TokenUser): string =>
  sign({ id: user.id, tokenVersion: user.tokenVersion }, authConfig.refreshSecret, {
    expiresIn: authConfig.refreshExpiresIn,
  });

export const sendRefreshToken = (res: Response, token: string): void => {
  res.cookie("jrt", token, { httpOnly: true });
};
"#;
